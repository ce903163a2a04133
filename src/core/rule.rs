//! The rule abstraction and accumulation helpers.
//!
//! Rules are pure functions from a candidate JSON value to either a
//! normalized value or ALL the violations found. Results are Stillwater
//! `Validation`s, so independent members of an object are checked in full
//! and their failures merged with `Validation::and` instead of stopping at
//! the first one.

use crate::core::path::FieldPath;
use crate::core::violation::{ValidationErrors, Violations};
use serde_json::Value;
use stillwater::validation::Validation;

/// Outcome of a rule: the normalized value or every violation.
pub type RuleResult<T> = Validation<T, Violations>;

/// A reusable, stateless validation rule.
///
/// `check` receives `None` when the value is absent (a missing object key)
/// so rules can tell "missing" apart from "present but wrong type"; JSON
/// `null` is a present value.
///
/// # Example
///
/// ```rust
/// use biolink_rules::core::Rule;
/// use biolink_rules::profile::validators;
/// use serde_json::json;
///
/// let result = validators().username().validate(&json!("alice"));
/// assert!(result.is_success());
///
/// let result = validators().username().validate(&json!("admin"));
/// assert!(result.is_failure());
/// ```
pub trait Rule: Send + Sync {
    type Output;

    /// Name used in logs.
    fn name(&self) -> &str;

    /// Validate `value` found at `path` inside a larger input.
    fn check(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<Self::Output>;

    /// Validate a standalone value, reporting paths relative to it.
    fn validate(&self, value: &Value) -> RuleResult<Self::Output> {
        let result = self.check(Some(value), &FieldPath::root());
        match &result {
            Validation::Success(_) => tracing::trace!(rule = self.name(), "value accepted"),
            Validation::Failure(violations) => tracing::debug!(
                rule = self.name(),
                violations = violations.len(),
                "value rejected"
            ),
        }
        result
    }
}

/// Convert a rule outcome into a `Result` usable with `?`.
pub fn into_result<T>(result: RuleResult<T>) -> Result<T, ValidationErrors> {
    result.into_result().map_err(ValidationErrors::from)
}

/// Pure predicate applied after a value has the right shape.
///
/// The predicate must be deterministic and thread-safe; rules share their
/// refinements across every caller.
pub struct Refinement<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Refinement<T> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Refinement {
            predicate: Box::new(predicate),
        }
    }

    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

/// JSON type name used in "Expected ..., received ..." messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
