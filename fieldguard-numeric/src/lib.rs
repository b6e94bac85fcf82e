//! Numeric coercion for fieldguard value bounds.
//!
//! Value rules declare their bounds as text so that a single rule shape can
//! cover every numeric field type. This crate turns such a textual bound into
//! the exact representation of the field it guards and orders it against the
//! field's runtime value:
//! - [`NumericKind`]: the supported representations (fixed-width signed
//!   integers, `f32`/`f64`, arbitrary-precision integer and decimal)
//! - [`NumericValue`]: a value tagged with its kind
//! - [`coerce`]: parse a textual bound into a given kind
//! - [`compare_to_field_value`]: order a bound against a field value of the
//!   same kind
//!
//! Kinds are never converted into one another. Comparing values of different
//! kinds is a [`CoercionError::KindMismatch`].

mod coerce;
mod kind;
mod value;

pub use coerce::{coerce, compare_to_field_value};
pub use kind::NumericKind;
pub use value::NumericValue;

/// Arbitrary-precision integer type used for [`NumericKind::BigInteger`].
pub use num_bigint::BigInt;

/// Arbitrary-precision decimal type used for [`NumericKind::BigDecimal`].
pub use bigdecimal::BigDecimal;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, CoercionError>;

/// Errors that can occur while coercing or comparing numeric values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    /// The field's type has no numeric interpretation.
    #[error("type {type_name} has no numeric interpretation")]
    UnsupportedKind { type_name: String },

    /// The text is not a valid literal for the target kind.
    #[error("cannot parse {text:?} as {kind}: {reason}")]
    ParseFailed {
        text: String,
        kind: NumericKind,
        reason: String,
    },

    /// The bound and the field value use different representations.
    #[error("bound of kind {bound} cannot be compared to a field of kind {field}")]
    KindMismatch {
        bound: NumericKind,
        field: NumericKind,
    },
}
