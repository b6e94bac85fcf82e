//! The rule catalog: which check each rule kind runs, and in what order.

use crate::error::{CheckError, ConfigurationError, EngineResult};
use crate::reject::{
    Rejection, reject_if_empty, reject_if_length_less_than, reject_if_length_more_than,
    reject_if_not_matches, reject_if_value_less_than, reject_if_value_more_than,
};
use crate::validator::FieldValidator;
use fieldguard_model::{
    Constraint, ErrorArg, ErrorSink, FieldValue, NumericKind, NumericValue, Rule, RuleKind,
    RuleSource, Validatable,
};
use fieldguard_numeric::{CoercionError, coerce};
use tracing::debug;

/// An ordered list of validation passes, one per rule kind.
///
/// Immutable once built and safe to share across threads. Each call gets its
/// own [`ErrorSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    validators: Vec<FieldValidator>,
}

impl Default for RuleCatalog {
    /// All six rule kinds: Required, MinLength, MaxLength, MatchesPattern,
    /// MinValue, MaxValue.
    fn default() -> Self {
        Self::with_kinds(RuleKind::ALL)
    }
}

impl RuleCatalog {
    /// A catalog running only `kinds`, in the given order.
    pub fn with_kinds(kinds: impl IntoIterator<Item = RuleKind>) -> Self {
        Self {
            validators: kinds.into_iter().map(FieldValidator::new).collect(),
        }
    }

    /// The passes in evaluation order.
    pub fn validators(&self) -> &[FieldValidator] {
        &self.validators
    }

    /// Returns true if `rules` has registrations for `subject_type`.
    pub fn supports(&self, rules: &dyn RuleSource, subject_type: &str) -> bool {
        rules.supports(subject_type)
    }

    /// Validates `subject` against `rules`, recording failures in `sink`.
    ///
    /// `Ok(())` means the subject was fully checked; inspect the sink for
    /// violations. `Err` means the rules do not fit the subject.
    pub fn validate(
        &self,
        subject: &dyn Validatable,
        rules: &dyn RuleSource,
        sink: &mut dyn ErrorSink,
    ) -> EngineResult<()> {
        let subject_type = subject.subject_type();
        if !self.supports(rules, subject_type) {
            return Err(ConfigurationError::UnsupportedSubject {
                subject: subject_type.to_string(),
            });
        }
        debug!(subject = subject_type, passes = self.validators.len(), "Validating subject");
        for validator in &self.validators {
            validator.validate(subject, rules, sink)?;
        }
        Ok(())
    }
}

/// A rule source paired with a catalog.
///
/// Build one per application and share it; `validate` takes `&self`.
#[derive(Debug)]
pub struct Validator<R> {
    rules: R,
    catalog: RuleCatalog,
}

impl<R: RuleSource> Validator<R> {
    /// Uses the default catalog.
    pub fn new(rules: R) -> Self {
        Self::with_catalog(rules, RuleCatalog::default())
    }

    pub fn with_catalog(rules: R, catalog: RuleCatalog) -> Self {
        Self { rules, catalog }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn supports(&self, subject_type: &str) -> bool {
        self.catalog.supports(&self.rules, subject_type)
    }

    /// See [`RuleCatalog::validate`].
    pub fn validate(&self, subject: &dyn Validatable, sink: &mut dyn ErrorSink) -> EngineResult<()> {
        self.catalog.validate(subject, &self.rules, sink)
    }
}

/// Runs the check bound to `rule`'s kind against a present field value.
pub(crate) fn apply_rule(
    rule: &Rule,
    field: &str,
    value: &dyn FieldValue,
    error_code: &str,
    sink: &mut dyn ErrorSink,
) -> Result<(), CheckError> {
    let rejection =
        Rejection::new(error_code).with_default_message(rule.default_message.as_deref());
    let present = Some(value);
    match &rule.constraint {
        Constraint::Required => reject_if_empty(sink, field, present, rejection)?,
        Constraint::MinLength { length } => reject_if_length_less_than(
            sink,
            field,
            present,
            *length,
            rejection.with_args(vec![ErrorArg::Length(*length)]),
        )?,
        Constraint::MaxLength { length } => reject_if_length_more_than(
            sink,
            field,
            present,
            *length,
            rejection.with_args(vec![ErrorArg::Length(*length)]),
        )?,
        Constraint::MatchesPattern { pattern } => reject_if_not_matches(
            sink,
            field,
            present,
            pattern,
            rejection.with_args(vec![ErrorArg::Text(pattern.clone())]),
        )?,
        Constraint::MinValue {
            bound,
            numeric_kind,
        } => {
            let min = coerce_bound(value, bound, *numeric_kind)?;
            let args = vec![ErrorArg::Number(min.clone())];
            reject_if_value_less_than(sink, field, present, &min, rejection.with_args(args))?;
        }
        Constraint::MaxValue {
            bound,
            numeric_kind,
        } => {
            let max = coerce_bound(value, bound, *numeric_kind)?;
            let args = vec![ErrorArg::Number(max.clone())];
            reject_if_value_more_than(sink, field, present, &max, rejection.with_args(args))?;
        }
    }
    Ok(())
}

/// Parses `bound` for a field, after checking the field is declared as `kind`.
fn coerce_bound(
    value: &dyn FieldValue,
    bound: &str,
    kind: NumericKind,
) -> Result<NumericValue, CoercionError> {
    let declared = value
        .as_numeric()
        .ok_or_else(|| CoercionError::UnsupportedKind {
            type_name: value.type_name().to_string(),
        })?
        .kind();
    if declared != kind {
        return Err(CoercionError::KindMismatch {
            bound: kind,
            field: declared,
        });
    }
    coerce(bound, kind)
}
