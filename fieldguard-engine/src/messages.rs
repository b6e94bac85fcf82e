//! Turning violations into display messages.

use fieldguard_model::Violation;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Message templates keyed by error code.
///
/// Templates use positional placeholders filled from the violation's
/// arguments: `"must be at least {0} characters"`. A placeholder without a
/// matching argument is left as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads templates from a JSON object of `code -> template`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_template(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(code.into(), template.into());
        self
    }

    pub fn template(&self, code: &str) -> Option<&str> {
        self.templates.get(code).map(String::as_str)
    }

    /// Resolves the message for `violation`.
    ///
    /// Falls back to the violation's default message, then to its error code.
    pub fn resolve(&self, violation: &Violation) -> String {
        match self.template(&violation.error_code) {
            Some(template) => PLACEHOLDER
                .replace_all(template, |caps: &Captures<'_>| {
                    caps[1]
                        .parse::<usize>()
                        .ok()
                        .and_then(|i| violation.args.get(i))
                        .map_or_else(|| caps[0].to_string(), ToString::to_string)
                })
                .into_owned(),
            None => violation
                .default_message
                .clone()
                .unwrap_or_else(|| violation.error_code.clone()),
        }
    }
}
