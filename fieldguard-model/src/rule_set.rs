//! Rule registration: which rules are attached to which fields.

use crate::{Constraint, Rule, RuleKind, full_match};
use fieldguard_numeric::{CoercionError, coerce};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Looks up the rules attached to a subject type's fields.
///
/// Implementations are built once and shared read-only between validation
/// calls.
pub trait RuleSource: Send + Sync {
    /// Returns true if any rules are registered for `subject_type`.
    fn supports(&self, subject_type: &str) -> bool;

    /// Returns the rule of `kind` attached to `field`, if any.
    fn rule_for(&self, subject_type: &str, field: &str, kind: RuleKind) -> Option<&Rule>;
}

/// Errors detected while registering rules.
#[derive(Debug, Error)]
pub enum RuleSetError {
    /// A value bound does not parse as its declared numeric kind.
    #[error("invalid bound for {subject}.{field}: {source}")]
    InvalidBound {
        subject: String,
        field: String,
        #[source]
        source: CoercionError,
    },

    /// A pattern does not compile.
    #[error("invalid pattern for {subject}.{field}: {source}")]
    InvalidPattern {
        subject: String,
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The same rule kind is attached twice to one field.
    #[error("duplicate {kind} rule on {subject}.{field}")]
    DuplicateRule {
        subject: String,
        field: String,
        kind: RuleKind,
    },

    /// The rule configuration is not valid JSON for a rule set.
    #[error("rule configuration error: {0}")]
    Json(#[from] serde_json::Error),
}

type FieldRules = BTreeMap<String, Vec<Rule>>;

/// An immutable registry of rules keyed by subject type and field name.
///
/// Loaded from JSON with [`RuleSet::from_json`] or assembled with
/// [`RuleSet::builder`]. Either way every rule is checked on construction:
/// bounds must parse, patterns must compile and a field carries at most one
/// rule of each kind. Deserializing through serde runs the same checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRuleSet")]
pub struct RuleSet {
    subjects: BTreeMap<String, FieldRules>,
}

/// Unchecked wire form of a [`RuleSet`].
#[derive(Deserialize)]
struct RawRuleSet {
    subjects: BTreeMap<String, FieldRules>,
}

impl TryFrom<RawRuleSet> for RuleSet {
    type Error = RuleSetError;

    fn try_from(raw: RawRuleSet) -> Result<Self, Self::Error> {
        let set = RuleSet {
            subjects: raw.subjects,
        };
        set.check()?;
        Ok(set)
    }
}

impl RuleSet {
    /// Starts an empty builder.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Parses and checks a rule set from its JSON form.
    ///
    /// ```json
    /// { "subjects": { "loginForm": { "password": [ { "kind": "required" } ] } } }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RuleSetError> {
        let raw: RawRuleSet = serde_json::from_str(json)?;
        let set = RuleSet::try_from(raw)?;
        debug!(subjects = set.subjects.len(), "Loaded rule set");
        Ok(set)
    }

    /// Serializes the rule set to JSON.
    pub fn to_json(&self) -> Result<String, RuleSetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns all rules attached to `field`, in registration order.
    pub fn rules(&self, subject_type: &str, field: &str) -> &[Rule] {
        self.subjects
            .get(subject_type)
            .and_then(|fields| fields.get(field))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the registered subject type names.
    pub fn subject_types(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    fn check(&self) -> Result<(), RuleSetError> {
        for (subject, fields) in &self.subjects {
            for (field, rules) in fields {
                for (i, rule) in rules.iter().enumerate() {
                    if rules[..i].iter().any(|r| r.kind() == rule.kind()) {
                        return Err(RuleSetError::DuplicateRule {
                            subject: subject.clone(),
                            field: field.clone(),
                            kind: rule.kind(),
                        });
                    }
                    check_rule(subject, field, rule)?;
                }
            }
        }
        Ok(())
    }
}

fn check_rule(subject: &str, field: &str, rule: &Rule) -> Result<(), RuleSetError> {
    match &rule.constraint {
        Constraint::MinValue {
            bound,
            numeric_kind,
        }
        | Constraint::MaxValue {
            bound,
            numeric_kind,
        } => {
            coerce(bound, *numeric_kind).map_err(|source| RuleSetError::InvalidBound {
                subject: subject.to_string(),
                field: field.to_string(),
                source,
            })?;
        }
        Constraint::MatchesPattern { pattern } => {
            full_match(pattern).map_err(|source| RuleSetError::InvalidPattern {
                subject: subject.to_string(),
                field: field.to_string(),
                source,
            })?;
        }
        Constraint::Required | Constraint::MinLength { .. } | Constraint::MaxLength { .. } => {}
    }
    Ok(())
}

impl RuleSource for RuleSet {
    fn supports(&self, subject_type: &str) -> bool {
        self.subjects.contains_key(subject_type)
    }

    fn rule_for(&self, subject_type: &str, field: &str, kind: RuleKind) -> Option<&Rule> {
        self.rules(subject_type, field)
            .iter()
            .find(|rule| rule.kind() == kind)
    }
}

/// Assembles a [`RuleSet`] in code.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    subjects: BTreeMap<String, FieldRules>,
}

impl RuleSetBuilder {
    /// Registers `subject_type` even if none of its fields carry rules.
    #[must_use]
    pub fn subject(mut self, subject_type: impl Into<String>) -> Self {
        self.subjects.entry(subject_type.into()).or_default();
        self
    }

    /// Attaches `rule` to `field` of `subject_type`.
    #[must_use]
    pub fn rule(
        mut self,
        subject_type: impl Into<String>,
        field: impl Into<String>,
        rule: impl Into<Rule>,
    ) -> Self {
        self.subjects
            .entry(subject_type.into())
            .or_default()
            .entry(field.into())
            .or_default()
            .push(rule.into());
        self
    }

    /// Checks every rule and freezes the set.
    pub fn build(self) -> Result<RuleSet, RuleSetError> {
        RuleSet::try_from(RawRuleSet {
            subjects: self.subjects,
        })
    }
}
