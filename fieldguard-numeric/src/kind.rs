use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The numeric representation a value-bounded field is declared with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    I8,
    I16,
    /// The bound type when a rule does not name one.
    #[default]
    I32,
    I64,
    F32,
    F64,
    BigInteger,
    BigDecimal,
}

impl NumericKind {
    /// All supported kinds, narrowest integer first.
    pub const ALL: [NumericKind; 8] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::BigInteger,
        Self::BigDecimal,
    ];

    /// Returns the configuration name of this kind (e.g. `"i32"`, `"big_decimal"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::BigInteger => "big_integer",
            Self::BigDecimal => "big_decimal",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown numeric kind: {s}"))
    }
}
