//! Rule and field model for fieldguard.
//!
//! Defines the types shared between rule configuration and the validation
//! engine:
//! - [`Rule`] / [`Constraint`] / [`RuleKind`]: declarative per-field constraints
//! - [`RuleSet`] / [`RuleSource`]: the registry that attaches rules to fields
//! - [`FieldValue`], [`LengthLike`], [`PatternMatchable`]: the capabilities a
//!   field value may expose to rules
//! - [`FieldDescriptor`] / [`Validatable`]: how a subject enumerates its fields
//! - [`Violation`] / [`ErrorArg`] / [`ErrorSink`]: where rejections are recorded
//!
//! The engine in `fieldguard-engine` consumes these types; it never sees the
//! concrete type of a field value.

mod rule;
mod rule_set;
mod subject;
mod value;
mod violation;

pub use fieldguard_numeric::{NumericKind, NumericValue};
pub use rule::{Constraint, Rule, RuleKind};
pub use rule_set::{RuleSet, RuleSetBuilder, RuleSetError, RuleSource};
pub use subject::{FieldDescriptor, Validatable};
pub use value::{BoxError, FieldValue, LengthLike, PatternMatchable, full_match};
pub use violation::{ErrorArg, ErrorSink, Violation};
