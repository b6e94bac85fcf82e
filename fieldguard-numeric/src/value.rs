use crate::NumericKind;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::fmt;

/// A numeric value tagged with its exact representation.
///
/// Ordering is only defined between values of the same [`NumericKind`], see
/// [`compare_to_field_value`](crate::compare_to_field_value).
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
}

impl NumericValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::I8(_) => NumericKind::I8,
            Self::I16(_) => NumericKind::I16,
            Self::I32(_) => NumericKind::I32,
            Self::I64(_) => NumericKind::I64,
            Self::F32(_) => NumericKind::F32,
            Self::F64(_) => NumericKind::F64,
            Self::BigInteger(_) => NumericKind::BigInteger,
            Self::BigDecimal(_) => NumericKind::BigDecimal,
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::BigInteger(v) => write!(f, "{v}"),
            Self::BigDecimal(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for NumericValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    BigInt => BigInteger,
    BigDecimal => BigDecimal,
}
