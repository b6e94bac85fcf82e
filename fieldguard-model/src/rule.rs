use fieldguard_numeric::NumericKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of rule kinds, in the order the engine evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    MatchesPattern,
    MinValue,
    MaxValue,
}

impl RuleKind {
    /// Every rule kind in evaluation order.
    pub const ALL: [RuleKind; 6] = [
        Self::Required,
        Self::MinLength,
        Self::MaxLength,
        Self::MatchesPattern,
        Self::MinValue,
        Self::MaxValue,
    ];

    /// Returns the rule kind's type name (e.g. `"MinLength"`).
    ///
    /// Default error codes are built from this name with its first letter
    /// lowercased.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::MinLength => "MinLength",
            Self::MaxLength => "MaxLength",
            Self::MatchesPattern => "MatchesPattern",
            Self::MinValue => "MinValue",
            Self::MaxValue => "MaxValue",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a rule requires of a field value.
///
/// Serialized with an inline `kind` tag, e.g.
/// `{"kind": "max_value", "bound": "99", "numeric_kind": "i64"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// The value must not be empty.
    Required,
    /// The value's length must be at least `length`.
    MinLength { length: usize },
    /// The value's length must be at most `length`.
    MaxLength { length: usize },
    /// The whole value must match `pattern`.
    MatchesPattern { pattern: String },
    /// The value must be at least `bound`, parsed as `numeric_kind`.
    MinValue {
        bound: String,
        #[serde(default)]
        numeric_kind: NumericKind,
    },
    /// The value must be at most `bound`, parsed as `numeric_kind`.
    MaxValue {
        bound: String,
        #[serde(default)]
        numeric_kind: NumericKind,
    },
}

impl Constraint {
    /// Returns the kind of this constraint.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Required => RuleKind::Required,
            Self::MinLength { .. } => RuleKind::MinLength,
            Self::MaxLength { .. } => RuleKind::MaxLength,
            Self::MatchesPattern { .. } => RuleKind::MatchesPattern,
            Self::MinValue { .. } => RuleKind::MinValue,
            Self::MaxValue { .. } => RuleKind::MaxValue,
        }
    }
}

/// A constraint attached to a field, with optional error overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(flatten)]
    pub constraint: Constraint,
    /// Replaces the computed `subject.field.ruleKind` error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Fallback message handed to the error sink with the violation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
}

impl Rule {
    /// Wraps a constraint without error overrides.
    pub fn new(constraint: Constraint) -> Self {
        Self {
            constraint,
            error_code: None,
            default_message: None,
        }
    }

    pub fn required() -> Self {
        Self::new(Constraint::Required)
    }

    pub fn min_length(length: usize) -> Self {
        Self::new(Constraint::MinLength { length })
    }

    pub fn max_length(length: usize) -> Self {
        Self::new(Constraint::MaxLength { length })
    }

    pub fn matches_pattern(pattern: impl Into<String>) -> Self {
        Self::new(Constraint::MatchesPattern {
            pattern: pattern.into(),
        })
    }

    pub fn min_value(bound: impl Into<String>, numeric_kind: NumericKind) -> Self {
        Self::new(Constraint::MinValue {
            bound: bound.into(),
            numeric_kind,
        })
    }

    pub fn max_value(bound: impl Into<String>, numeric_kind: NumericKind) -> Self {
        Self::new(Constraint::MaxValue {
            bound: bound.into(),
            numeric_kind,
        })
    }

    /// Sets a custom error code. An empty code is treated as unset.
    #[must_use]
    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    #[must_use]
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }

    /// Returns the kind of this rule.
    pub fn kind(&self) -> RuleKind {
        self.constraint.kind()
    }

    /// Returns the custom error code, ignoring an empty one.
    pub fn custom_error_code(&self) -> Option<&str> {
        self.error_code.as_deref().filter(|code| !code.is_empty())
    }
}

impl From<Constraint> for Rule {
    fn from(constraint: Constraint) -> Self {
        Self::new(constraint)
    }
}
