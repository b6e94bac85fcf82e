//! One-call rejection helpers for hand-written validators.
//!
//! Each helper checks a single field value and records a violation in the
//! sink when the check fails. An unset value (`None`) is always valid. A value
//! that cannot support the check returns an error instead of a violation.

use crate::capability::{invoke_length_like, invoke_matches};
use crate::error::CapabilityError;
use fieldguard_model::{ErrorArg, ErrorSink, FieldValue};
use fieldguard_numeric::{CoercionError, NumericValue, compare_to_field_value};
use std::cmp::Ordering;

/// The error code, arguments and default message recorded on rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection<'a> {
    pub error_code: &'a str,
    pub args: Vec<ErrorArg>,
    pub default_message: Option<&'a str>,
}

impl<'a> Rejection<'a> {
    pub fn new(error_code: &'a str) -> Self {
        Self {
            error_code,
            args: Vec::new(),
            default_message: None,
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<ErrorArg>) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub fn with_default_message(mut self, message: Option<&'a str>) -> Self {
        self.default_message = message;
        self
    }

    fn record(self, sink: &mut dyn ErrorSink, field: &str) {
        sink.reject(field, self.error_code, self.args, self.default_message);
    }
}

/// Rejects `field` if its value has length zero.
///
/// A value with no notion of length is present and therefore not empty.
pub fn reject_if_empty(
    sink: &mut dyn ErrorSink,
    field: &str,
    value: Option<&dyn FieldValue>,
    rejection: Rejection<'_>,
) -> Result<(), CapabilityError> {
    let Some(value) = value else {
        return Ok(());
    };
    match invoke_length_like(value) {
        Ok(0) => rejection.record(sink, field),
        Ok(_) | Err(CapabilityError::NotApplicable { .. }) => {}
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Rejects `field` if its length is below `min_length`.
pub fn reject_if_length_less_than(
    sink: &mut dyn ErrorSink,
    field: &str,
    value: Option<&dyn FieldValue>,
    min_length: usize,
    rejection: Rejection<'_>,
) -> Result<(), CapabilityError> {
    let Some(value) = value else {
        return Ok(());
    };
    if invoke_length_like(value)? < min_length {
        rejection.record(sink, field);
    }
    Ok(())
}

/// Rejects `field` if its length exceeds `max_length`.
pub fn reject_if_length_more_than(
    sink: &mut dyn ErrorSink,
    field: &str,
    value: Option<&dyn FieldValue>,
    max_length: usize,
    rejection: Rejection<'_>,
) -> Result<(), CapabilityError> {
    let Some(value) = value else {
        return Ok(());
    };
    if invoke_length_like(value)? > max_length {
        rejection.record(sink, field);
    }
    Ok(())
}

/// Rejects `field` if its value does not fully match `pattern`.
pub fn reject_if_not_matches(
    sink: &mut dyn ErrorSink,
    field: &str,
    value: Option<&dyn FieldValue>,
    pattern: &str,
    rejection: Rejection<'_>,
) -> Result<(), CapabilityError> {
    let Some(value) = value else {
        return Ok(());
    };
    if !invoke_matches(value, pattern)? {
        rejection.record(sink, field);
    }
    Ok(())
}

/// Rejects `field` if its value is below `min`. Equal values are valid.
pub fn reject_if_value_less_than(
    sink: &mut dyn ErrorSink,
    field: &str,
    value: Option<&dyn FieldValue>,
    min: &NumericValue,
    rejection: Rejection<'_>,
) -> Result<(), CoercionError> {
    let Some(value) = value else {
        return Ok(());
    };
    if compare_numeric(value, min)? == Ordering::Less {
        rejection.record(sink, field);
    }
    Ok(())
}

/// Rejects `field` if its value is above `max`. Equal values are valid.
pub fn reject_if_value_more_than(
    sink: &mut dyn ErrorSink,
    field: &str,
    value: Option<&dyn FieldValue>,
    max: &NumericValue,
    rejection: Rejection<'_>,
) -> Result<(), CoercionError> {
    let Some(value) = value else {
        return Ok(());
    };
    if compare_numeric(value, max)? == Ordering::Greater {
        rejection.record(sink, field);
    }
    Ok(())
}

fn compare_numeric(value: &dyn FieldValue, bound: &NumericValue) -> Result<Ordering, CoercionError> {
    let field_value = value
        .as_numeric()
        .ok_or_else(|| CoercionError::UnsupportedKind {
            type_name: value.type_name().to_string(),
        })?;
    compare_to_field_value(bound, &field_value)
}
