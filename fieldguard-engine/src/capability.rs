//! Bridges an opaque field value to the operation a rule needs.
//!
//! Callers must handle an unset field before reaching this module; only
//! present values are passed in.

use crate::error::CapabilityError;
use fieldguard_model::FieldValue;

const LENGTH: &str = "length";
const MATCHES: &str = "matches";

/// Measures the length of `value`.
pub fn invoke_length_like(value: &dyn FieldValue) -> Result<usize, CapabilityError> {
    let type_name = value.type_name();
    let length_like = value
        .as_length_like()
        .ok_or(CapabilityError::NotApplicable {
            type_name,
            operation: LENGTH,
        })?;
    let length = length_like
        .length()
        .map_err(|source| CapabilityError::InvocationFailed {
            type_name,
            operation: LENGTH,
            source,
        })?;
    usize::try_from(length).map_err(|_| CapabilityError::IncompatibleResult {
        type_name,
        operation: LENGTH,
        result: length.to_string(),
    })
}

/// Tests `value` against `pattern`.
pub fn invoke_matches(value: &dyn FieldValue, pattern: &str) -> Result<bool, CapabilityError> {
    let type_name = value.type_name();
    let matchable = value
        .as_pattern_matchable()
        .ok_or(CapabilityError::NotApplicable {
            type_name,
            operation: MATCHES,
        })?;
    matchable
        .matches(pattern)
        .map_err(|source| CapabilityError::InvocationFailed {
            type_name,
            operation: MATCHES,
            source,
        })
}
