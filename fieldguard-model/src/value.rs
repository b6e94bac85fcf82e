//! Field values and the capabilities they expose to rules.
//!
//! A rule never inspects a value's concrete type. It asks the value for a
//! capability ([`LengthLike`], [`PatternMatchable`], or a numeric view) and
//! the value either hands one out or declines.

use bigdecimal::BigDecimal;
use fieldguard_numeric::NumericValue;
use num_bigint::BigInt;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, RwLock};

/// Error raised by a capability while computing its result.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A value whose length can be measured.
pub trait LengthLike {
    /// Returns the length of the value.
    ///
    /// A negative result is not a length and is reported by the engine as an
    /// incompatible result.
    fn length(&self) -> Result<i64, BoxError>;
}

/// A value that can be tested against a pattern.
pub trait PatternMatchable {
    /// Returns whether the whole value matches `pattern`.
    fn matches(&self, pattern: &str) -> Result<bool, BoxError>;
}

/// An opaque field value.
///
/// Every capability defaults to "not offered". Implementors opt in to the
/// capabilities their type supports.
pub trait FieldValue: fmt::Debug {
    /// Type name used in configuration error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_length_like(&self) -> Option<&dyn LengthLike> {
        None
    }

    fn as_pattern_matchable(&self) -> Option<&dyn PatternMatchable> {
        None
    }

    /// Returns the value in its declared numeric representation, if it has one.
    fn as_numeric(&self) -> Option<NumericValue> {
        None
    }
}

/// Anchored regexes keyed by the pattern they were compiled from.
static COMPILED: LazyLock<RwLock<HashMap<String, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Compiles `pattern` so that it only matches an entire input.
///
/// Compiled patterns are cached process-wide; a rule set compiles its
/// patterns when built, so checks at validation time reuse them. Patterns
/// that fail to compile are not cached.
pub fn full_match(pattern: &str) -> Result<Regex, regex::Error> {
    if let Some(re) = COMPILED.read().ok().and_then(|c| c.get(pattern).cloned()) {
        return Ok(re);
    }
    let re = Regex::new(&format!("^(?:{pattern})$"))?;
    if let Ok(mut cache) = COMPILED.write() {
        cache.insert(pattern.to_string(), re.clone());
    }
    Ok(re)
}

// ── Text ─────────────────────────────────────────────────────────

impl LengthLike for String {
    fn length(&self) -> Result<i64, BoxError> {
        Ok(i64::try_from(self.chars().count())?)
    }
}

impl PatternMatchable for String {
    fn matches(&self, pattern: &str) -> Result<bool, BoxError> {
        Ok(full_match(pattern)?.is_match(self))
    }
}

impl FieldValue for String {
    fn as_length_like(&self) -> Option<&dyn LengthLike> {
        Some(self)
    }

    fn as_pattern_matchable(&self) -> Option<&dyn PatternMatchable> {
        Some(self)
    }
}

// ── Collections ──────────────────────────────────────────────────

impl<T: fmt::Debug> LengthLike for Vec<T> {
    fn length(&self) -> Result<i64, BoxError> {
        Ok(i64::try_from(self.len())?)
    }
}

impl<T: fmt::Debug> FieldValue for Vec<T> {
    fn as_length_like(&self) -> Option<&dyn LengthLike> {
        Some(self)
    }
}

// ── Scalars ──────────────────────────────────────────────────────

impl FieldValue for bool {}

macro_rules! numeric_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn as_numeric(&self) -> Option<NumericValue> {
                    Some(NumericValue::from(*self))
                }
            }
        )*
    };
}

numeric_field_value!(i8, i16, i32, i64, f32, f64);

impl FieldValue for BigInt {
    fn as_numeric(&self) -> Option<NumericValue> {
        Some(NumericValue::BigInteger(self.clone()))
    }
}

impl FieldValue for BigDecimal {
    fn as_numeric(&self) -> Option<NumericValue> {
        Some(NumericValue::BigDecimal(self.clone()))
    }
}
