use crate::FieldValue;

/// One field of a subject under validation.
///
/// `value` is `None` while the field is not yet set. An unset field satisfies
/// every rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor<'a> {
    pub name: &'a str,
    pub value: Option<&'a dyn FieldValue>,
}

impl<'a> FieldDescriptor<'a> {
    /// Describes a field holding `value`.
    pub fn new(name: &'a str, value: &'a dyn FieldValue) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// Describes a field that is not set.
    pub fn unset(name: &'a str) -> Self {
        Self { name, value: None }
    }

    /// Describes an optional field, unset when `value` is `None`.
    pub fn optional<T: FieldValue>(name: &'a str, value: Option<&'a T>) -> Self {
        Self {
            name,
            value: value.map(|v| v as &dyn FieldValue),
        }
    }

    /// Returns true if the field holds a value.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// An object whose fields can be validated.
///
/// `fields` must return the same fields in the same order on every call so
/// that error codes and violation order are reproducible.
pub trait Validatable {
    /// The type name rules are registered under (e.g. `"loginForm"`).
    fn subject_type(&self) -> &str;

    /// The subject's fields in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}
