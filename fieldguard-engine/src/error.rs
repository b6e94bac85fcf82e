//! Error types for the validation engine.
//!
//! Only configuration errors travel through `Result`. A field that fails its
//! rule is recorded in the [`ErrorSink`](fieldguard_model::ErrorSink) and the
//! call still succeeds.

use fieldguard_model::{BoxError, RuleKind};
use fieldguard_numeric::CoercionError;
use thiserror::Error;

/// Result type for validation calls.
pub type EngineResult<T> = Result<T, ConfigurationError>;

/// A field value could not provide the capability a rule needs.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The value's type has no such operation.
    #[error("{type_name} does not support {operation}")]
    NotApplicable {
        type_name: &'static str,
        operation: &'static str,
    },

    /// The operation exists but failed while computing its result.
    #[error("{operation} failed on {type_name}: {source}")]
    InvocationFailed {
        type_name: &'static str,
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    /// The operation returned something that is not a usable result.
    #[error("{operation} on {type_name} returned {result}")]
    IncompatibleResult {
        type_name: &'static str,
        operation: &'static str,
        result: String,
    },
}

/// A rule is attached to a field it cannot be applied to.
///
/// Aborts the whole validation call. This signals a programming mistake in
/// the rule registration or the subject, never bad input data.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The field value lacks the capability the rule relies on.
    #[error("{rule} rule on {subject}.{field} is incompatible with the field value: {source}")]
    Capability {
        subject: String,
        field: String,
        rule: RuleKind,
        #[source]
        source: CapabilityError,
    },

    /// The rule's numeric bound does not fit the field's numeric kind.
    #[error("{rule} rule on {subject}.{field} has an unusable bound: {source}")]
    Coercion {
        subject: String,
        field: String,
        rule: RuleKind,
        #[source]
        source: CoercionError,
    },

    /// No rules are registered for the subject type.
    #[error("subject type {subject} is not registered for validation")]
    UnsupportedSubject { subject: String },
}

impl ConfigurationError {
    /// Name of the offending field, if the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Capability { field, .. } | Self::Coercion { field, .. } => Some(field),
            Self::UnsupportedSubject { .. } => None,
        }
    }

    /// Kind of the offending rule, if the error concerns one.
    pub fn rule(&self) -> Option<RuleKind> {
        match self {
            Self::Capability { rule, .. } | Self::Coercion { rule, .. } => Some(*rule),
            Self::UnsupportedSubject { .. } => None,
        }
    }
}

/// The cause of a configuration error before field context is attached.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

impl CheckError {
    pub(crate) fn in_context(self, subject: &str, field: &str, rule: RuleKind) -> ConfigurationError {
        let subject = subject.to_string();
        let field = field.to_string();
        match self {
            Self::Capability(source) => ConfigurationError::Capability {
                subject,
                field,
                rule,
                source,
            },
            Self::Coercion(source) => ConfigurationError::Coercion {
                subject,
                field,
                rule,
                source,
            },
        }
    }
}
