//! The per-rule-kind validation pass.

use crate::catalog::apply_rule;
use crate::error::EngineResult;
use fieldguard_model::{ErrorSink, Rule, RuleKind, RuleSource, Validatable};
use tracing::{debug, trace, warn};

/// Applies the rules of one kind to every field of a subject.
///
/// For each field, in subject order:
/// 1. a field that already has a violation is skipped,
/// 2. a field without a rule of this kind is skipped,
/// 3. an unset field is valid and skipped,
/// 4. otherwise the rule is checked and a failure recorded in the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    kind: RuleKind,
}

impl FieldValidator {
    pub const fn new(kind: RuleKind) -> Self {
        Self { kind }
    }

    /// The rule kind this pass applies.
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns true if `rules` has registrations for `subject_type`.
    pub fn supports(&self, rules: &dyn RuleSource, subject_type: &str) -> bool {
        rules.supports(subject_type)
    }

    /// Runs this pass over `subject`.
    ///
    /// Returns an error, and stops, at the first field whose value cannot be
    /// checked against its rule.
    pub fn validate(
        &self,
        subject: &dyn Validatable,
        rules: &dyn RuleSource,
        sink: &mut dyn ErrorSink,
    ) -> EngineResult<()> {
        let subject_type = subject.subject_type();
        for field in subject.fields() {
            if sink.has_existing_violation(field.name) {
                trace!(field = field.name, rule = %self.kind, "Field already rejected, skipping");
                continue;
            }
            let Some(rule) = rules.rule_for(subject_type, field.name, self.kind) else {
                continue;
            };
            let Some(value) = field.value else {
                trace!(field = field.name, rule = %self.kind, "Field not set, skipping");
                continue;
            };

            let error_code = resolve_error_code(rule, sink.subject_name(), field.name);
            debug!(field = field.name, rule = %self.kind, code = %error_code, "Checking field");
            apply_rule(rule, field.name, value, &error_code, sink).map_err(|e| {
                let err = e.in_context(subject_type, field.name, self.kind);
                warn!(error = %err, "Validation aborted by configuration error");
                err
            })?;
        }
        Ok(())
    }
}

/// Returns the rule's custom error code, or `subject.field.ruleKind`.
pub fn resolve_error_code(rule: &Rule, subject_name: &str, field: &str) -> String {
    match rule.custom_error_code() {
        Some(code) => code.to_string(),
        None => default_error_code(subject_name, field, rule.kind()),
    }
}

/// Builds the default error code, e.g. `loginForm.password.required`.
pub fn default_error_code(subject_name: &str, field: &str, kind: RuleKind) -> String {
    format!("{subject_name}.{field}.{}", decapitalize(kind.name()))
}

fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
