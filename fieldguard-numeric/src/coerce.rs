//! Parsing textual bounds and ordering them against field values.

use crate::{CoercionError, NumericKind, NumericValue, Result};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// Parses `text` into a value of exactly `kind`.
///
/// The literal must be valid for the target representation as written:
/// `"3.5"` is not an `i32`, `"300"` is not an `i8`, and no suffixes such as
/// `"3L"` are accepted.
pub fn coerce(text: &str, kind: NumericKind) -> Result<NumericValue> {
    match kind {
        NumericKind::I8 => parse::<i8>(text, kind).map(NumericValue::I8),
        NumericKind::I16 => parse::<i16>(text, kind).map(NumericValue::I16),
        NumericKind::I32 => parse::<i32>(text, kind).map(NumericValue::I32),
        NumericKind::I64 => parse::<i64>(text, kind).map(NumericValue::I64),
        NumericKind::F32 => parse::<f32>(text, kind).map(NumericValue::F32),
        NumericKind::F64 => parse::<f64>(text, kind).map(NumericValue::F64),
        NumericKind::BigInteger => parse::<BigInt>(text, kind).map(NumericValue::BigInteger),
        NumericKind::BigDecimal => parse::<BigDecimal>(text, kind).map(NumericValue::BigDecimal),
    }
}

fn parse<T>(text: &str, kind: NumericKind) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse::<T>().map_err(|e| CoercionError::ParseFailed {
        text: text.to_string(),
        kind,
        reason: e.to_string(),
    })
}

/// Orders `field_value` relative to `bound`.
///
/// Returns `Ordering::Less` when the field value is below the bound. Both
/// values must share a kind; floats use a total order so that the result is
/// always defined.
pub fn compare_to_field_value(
    bound: &NumericValue,
    field_value: &NumericValue,
) -> Result<Ordering> {
    let ordering = match (field_value, bound) {
        (NumericValue::I8(a), NumericValue::I8(b)) => a.cmp(b),
        (NumericValue::I16(a), NumericValue::I16(b)) => a.cmp(b),
        (NumericValue::I32(a), NumericValue::I32(b)) => a.cmp(b),
        (NumericValue::I64(a), NumericValue::I64(b)) => a.cmp(b),
        (NumericValue::F32(a), NumericValue::F32(b)) => a.total_cmp(b),
        (NumericValue::F64(a), NumericValue::F64(b)) => a.total_cmp(b),
        (NumericValue::BigInteger(a), NumericValue::BigInteger(b)) => a.cmp(b),
        (NumericValue::BigDecimal(a), NumericValue::BigDecimal(b)) => a.cmp(b),
        _ => {
            return Err(CoercionError::KindMismatch {
                bound: bound.kind(),
                field: field_value.kind(),
            });
        }
    };
    Ok(ordering)
}
