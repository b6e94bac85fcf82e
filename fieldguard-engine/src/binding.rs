use fieldguard_model::{ErrorArg, ErrorSink, Violation};
use serde::Serialize;
use tracing::debug;

/// An in-memory [`ErrorSink`] collecting the violations of one validation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindingErrors {
    subject_name: String,
    violations: Vec<Violation>,
}

impl BindingErrors {
    /// Creates an empty sink for the object named `subject_name`.
    pub fn new(subject_name: impl Into<String>) -> Self {
        Self {
            subject_name: subject_name.into(),
            violations: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.violations.len()
    }

    /// Violations in the order they were recorded.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The first violation recorded for `field`.
    pub fn field_violation(&self, field: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field == field)
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl ErrorSink for BindingErrors {
    fn subject_name(&self) -> &str {
        &self.subject_name
    }

    fn has_existing_violation(&self, field: &str) -> bool {
        self.field_violation(field).is_some()
    }

    fn reject(
        &mut self,
        field: &str,
        error_code: &str,
        args: Vec<ErrorArg>,
        default_message: Option<&str>,
    ) {
        debug!(field, code = error_code, "Recorded violation");
        self.violations.push(Violation {
            field: field.to_string(),
            error_code: error_code.to_string(),
            args,
            default_message: default_message.map(str::to_string),
        });
    }
}
