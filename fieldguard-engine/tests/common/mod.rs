//! Shared test helpers for engine tests.

#![allow(dead_code)]

use fieldguard_engine::BindingErrors;
use fieldguard_model::{
    BoxError, ErrorArg, ErrorSink, FieldDescriptor, FieldValue, LengthLike, PatternMatchable,
    Validatable,
};
use std::cell::RefCell;

/// A subject whose fields are listed explicitly.
#[derive(Debug)]
pub struct Form {
    pub subject_type: &'static str,
    pub fields: Vec<(&'static str, Option<Box<dyn FieldValue + Send + Sync>>)>,
}

impl Form {
    pub fn new(subject_type: &'static str) -> Self {
        Self {
            subject_type,
            fields: Vec::new(),
        }
    }

    pub fn set(mut self, name: &'static str, value: impl FieldValue + Send + Sync + 'static) -> Self {
        self.fields.push((name, Some(Box::new(value))));
        self
    }

    pub fn unset(mut self, name: &'static str) -> Self {
        self.fields.push((name, None));
        self
    }
}

impl Validatable for Form {
    fn subject_type(&self) -> &str {
        self.subject_type
    }

    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        self.fields
            .iter()
            .map(|(name, value)| FieldDescriptor {
                name,
                value: value.as_deref().map(|v| v as &dyn FieldValue),
            })
            .collect()
    }
}

/// A length capability that always fails.
#[derive(Debug)]
pub struct BrokenLength;

impl LengthLike for BrokenLength {
    fn length(&self) -> Result<i64, BoxError> {
        Err("length source unavailable".into())
    }
}

impl FieldValue for BrokenLength {
    fn as_length_like(&self) -> Option<&dyn LengthLike> {
        Some(self)
    }
}

/// A length capability that reports a negative length.
#[derive(Debug)]
pub struct NegativeLength;

impl LengthLike for NegativeLength {
    fn length(&self) -> Result<i64, BoxError> {
        Ok(-1)
    }
}

impl FieldValue for NegativeLength {
    fn as_length_like(&self) -> Option<&dyn LengthLike> {
        Some(self)
    }
}

/// A value matching only one literal, without a length.
#[derive(Debug)]
pub struct Token(pub &'static str);

impl PatternMatchable for Token {
    fn matches(&self, pattern: &str) -> Result<bool, BoxError> {
        Ok(self.0 == pattern)
    }
}

impl FieldValue for Token {
    fn as_pattern_matchable(&self) -> Option<&dyn PatternMatchable> {
        Some(self)
    }
}

/// A sink that counts lookups and can start with pre-existing violations.
#[derive(Debug)]
pub struct RecordingSink {
    pub inner: BindingErrors,
    pub lookups: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new(subject_name: &str) -> Self {
        Self {
            inner: BindingErrors::new(subject_name),
            lookups: RefCell::new(Vec::new()),
        }
    }

    pub fn lookups_for(&self, field: &str) -> usize {
        self.lookups.borrow().iter().filter(|f| *f == field).count()
    }
}

impl ErrorSink for RecordingSink {
    fn subject_name(&self) -> &str {
        self.inner.subject_name()
    }

    fn has_existing_violation(&self, field: &str) -> bool {
        self.lookups.borrow_mut().push(field.to_string());
        self.inner.has_existing_violation(field)
    }

    fn reject(
        &mut self,
        field: &str,
        error_code: &str,
        args: Vec<ErrorArg>,
        default_message: Option<&str>,
    ) {
        self.inner.reject(field, error_code, args, default_message);
    }
}

/// Error codes recorded in `sink`, in order.
pub fn codes(sink: &BindingErrors) -> Vec<&str> {
    sink.violations()
        .iter()
        .map(|v| v.error_code.as_str())
        .collect()
}

/// Installs a test-writer subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_test_writer()
        .try_init();
}
