//! Per-field validation engine for fieldguard.
//!
//! Given a subject that enumerates its fields and a [`RuleSource`] that
//! attaches rules to them, the engine checks every set field against its
//! rules and records failures in an [`ErrorSink`]:
//! - [`RuleCatalog`] / [`Validator`]: run the passes for every rule kind
//! - [`FieldValidator`]: a single pass, and the default error code policy
//! - [`capability`]: length and pattern operations on opaque values
//! - [`reject`]: one-call rejection helpers for hand-written validators
//! - [`BindingErrors`]: an in-memory sink
//! - [`MessageCatalog`]: templates that turn violations into messages
//!
//! Failures come in two families. A field that does not satisfy its rule is a
//! violation: it is recorded in the sink, at most one per field, and the call
//! carries on. A rule that cannot be applied to its field (missing
//! capability, wrong numeric kind, unparseable bound) is a
//! [`ConfigurationError`]: the call stops and returns it.
//!
//! [`RuleSource`]: fieldguard_model::RuleSource
//! [`ErrorSink`]: fieldguard_model::ErrorSink

mod binding;
pub mod capability;
mod catalog;
mod error;
mod messages;
pub mod reject;
mod validator;

pub use binding::BindingErrors;
pub use catalog::{RuleCatalog, Validator};
pub use error::{CapabilityError, CheckError, ConfigurationError, EngineResult};
pub use messages::MessageCatalog;
pub use validator::{FieldValidator, default_error_code, resolve_error_code};
