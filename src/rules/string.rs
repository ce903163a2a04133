//! String rules with accumulating checks.
//!
//! A missing value or a non-string value fails with a single violation.
//! Once the value is a string, every configured check runs and all failures
//! are reported together.

use crate::core::{type_name, FieldPath, Refinement, Rule, RuleResult, Violation, ViolationKind};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use stillwater::validation::Validation;

/// Local part, `@`, dot-separated domain labels and an alphabetic TLD.
/// Leading dots and doubled dots are rejected separately. Classes are ASCII
/// only; a case-insensitive flag would fold `ſ` and the Kelvin sign into them.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is a valid regex")
});

fn is_email(candidate: &str) -> bool {
    !candidate.starts_with('.') && !candidate.contains("..") && EMAIL_REGEX.is_match(candidate)
}

fn is_url(candidate: &str) -> bool {
    url::Url::parse(candidate).is_ok()
}

enum Check {
    MinLen(usize),
    MaxLen(usize),
    Pattern(Regex),
    Email,
    Url,
    Refine(Refinement<str>, ViolationKind),
}

impl Check {
    fn passes(&self, value: &str) -> bool {
        match self {
            Check::MinLen(min) => value.chars().count() >= *min,
            Check::MaxLen(max) => value.chars().count() <= *max,
            Check::Pattern(pattern) => pattern.is_match(value),
            Check::Email => is_email(value),
            Check::Url => is_url(value),
            Check::Refine(refinement, _) => refinement.check(value),
        }
    }

    fn kind(&self) -> ViolationKind {
        match self {
            Check::MinLen(_) | Check::MaxLen(_) => ViolationKind::OutOfRange,
            Check::Pattern(_) | Check::Email | Check::Url => ViolationKind::FormatMismatch,
            Check::Refine(_, kind) => *kind,
        }
    }

    fn verify(&self, value: &str, message: &str, path: &FieldPath) -> RuleResult<()> {
        if self.passes(value) {
            Validation::success(())
        } else {
            Validation::fail(Violation::new(path.clone(), self.kind(), message))
        }
    }
}

/// Rule accepting strings that pass every configured check.
///
/// # Example
///
/// ```rust
/// use biolink_rules::core::Rule;
/// use biolink_rules::rules::StringRule;
/// use serde_json::json;
///
/// let nickname = StringRule::builder("nickname")
///     .required_message("Nickname is required.")
///     .min_len(2, "Too short.")
///     .max_len(8, "Too long.")
///     .build();
///
/// assert!(nickname.validate(&json!("zed")).is_success());
/// assert!(nickname.validate(&json!("z")).is_failure());
/// assert!(nickname.validate(&json!(42)).is_failure());
/// ```
pub struct StringRule {
    name: String,
    required_message: String,
    invalid_type_message: String,
    checks: Vec<(Check, String)>,
}

impl StringRule {
    pub fn builder(name: impl Into<String>) -> StringRuleBuilder {
        StringRuleBuilder::new(name)
    }
}

impl Rule for StringRule {
    type Output = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<String> {
        let text = match value {
            None => {
                return Validation::fail(Violation::missing(
                    path.clone(),
                    self.required_message.clone(),
                ))
            }
            Some(Value::String(text)) => text,
            Some(other) => {
                let message = self.invalid_type_message.replace("{received}", type_name(other));
                return Validation::fail(Violation::wrong_type(path.clone(), message));
            }
        };

        let checks = self
            .checks
            .iter()
            .map(|(check, message)| check.verify(text, message, path))
            .collect::<Vec<_>>();

        // Accumulate ALL failing checks
        Validation::all_vec(checks).map(|_| text.clone())
    }
}

/// Builder for [`StringRule`].
///
/// Messages default to the generic `Required` and
/// `Expected string, received <type>` texts.
pub struct StringRuleBuilder {
    name: String,
    required_message: String,
    invalid_type_message: String,
    checks: Vec<(Check, String)>,
}

impl StringRuleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_message: "Required".to_string(),
            invalid_type_message: "Expected string, received {received}".to_string(),
            checks: Vec::new(),
        }
    }

    /// Message reported when the value is absent
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    /// Message reported when the value is not a string.
    /// `{received}` is replaced by the JSON type of the value.
    pub fn invalid_type_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_type_message = message.into();
        self
    }

    /// Require at least `min` characters
    pub fn min_len(self, min: usize, message: impl Into<String>) -> Self {
        self.push(Check::MinLen(min), message)
    }

    /// Allow at most `max` characters
    pub fn max_len(self, max: usize, message: impl Into<String>) -> Self {
        self.push(Check::MaxLen(max), message)
    }

    /// Require a match of `pattern`
    pub fn pattern(self, pattern: &Regex, message: impl Into<String>) -> Self {
        self.push(Check::Pattern(pattern.clone()), message)
    }

    /// Require an email address
    pub fn email(self, message: impl Into<String>) -> Self {
        self.push(Check::Email, message)
    }

    /// Require an absolute URL
    pub fn url(self, message: impl Into<String>) -> Self {
        self.push(Check::Url, message)
    }

    /// Add a predicate check reported as [`ViolationKind::Refinement`]
    pub fn refine<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.push(
            Check::Refine(Refinement::new(predicate), ViolationKind::Refinement),
            message,
        )
    }

    /// Add a predicate check reported with an explicit kind
    pub fn refine_as<F>(
        self,
        kind: ViolationKind,
        predicate: F,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.push(Check::Refine(Refinement::new(predicate), kind), message)
    }

    fn push(mut self, check: Check, message: impl Into<String>) -> Self {
        self.checks.push((check, message.into()));
        self
    }

    pub fn build(self) -> StringRule {
        StringRule {
            name: self.name,
            required_message: self.required_message,
            invalid_type_message: self.invalid_type_message,
            checks: self.checks,
        }
    }
}
