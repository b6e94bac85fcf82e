use fieldguard_numeric::NumericValue;
use serde::{Serialize, Serializer};
use std::fmt;

/// An argument attached to a violation for message interpolation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorArg {
    Length(usize),
    Text(String),
    #[serde(serialize_with = "serialize_display")]
    Number(NumericValue),
}

fn serialize_display<S: Serializer>(value: &NumericValue, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl fmt::Display for ErrorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Number(v) => write!(f, "{v}"),
        }
    }
}

impl From<usize> for ErrorArg {
    fn from(n: usize) -> Self {
        Self::Length(n)
    }
}

impl From<&str> for ErrorArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ErrorArg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<NumericValue> for ErrorArg {
    fn from(v: NumericValue) -> Self {
        Self::Number(v)
    }
}

/// A recorded rejection of one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    pub error_code: String,
    pub args: Vec<ErrorArg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
}

/// Receives violations for one validation call.
///
/// A sink belongs to a single call and is only ever accessed through `&mut`,
/// so implementations need no synchronization.
pub trait ErrorSink {
    /// Name of the object being validated, used to build default error codes.
    fn subject_name(&self) -> &str;

    /// Returns true if `field` already has a recorded violation.
    fn has_existing_violation(&self, field: &str) -> bool;

    /// Records a violation for `field`.
    fn reject(
        &mut self,
        field: &str,
        error_code: &str,
        args: Vec<ErrorArg>,
        default_message: Option<&str>,
    );
}
