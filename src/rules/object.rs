//! Helpers for rules over JSON objects.

use crate::core::{type_name, FieldPath, Rule, RuleResult, Violation};
use serde_json::{Map, Value};
use stillwater::validation::Validation;

/// Require `value` to be a JSON object.
pub fn object<'a>(
    value: Option<&'a Value>,
    path: &FieldPath,
) -> RuleResult<&'a Map<String, Value>> {
    match value {
        None => Validation::fail(Violation::missing(path.clone(), "Required")),
        Some(Value::Object(members)) => Validation::success(members),
        Some(other) => Validation::fail(Violation::wrong_type(
            path.clone(),
            format!("Expected object, received {}", type_name(other)),
        )),
    }
}

/// Validate the member `key` of `members` with `rule`.
pub fn member<R: Rule>(
    rule: &R,
    members: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
) -> RuleResult<R::Output> {
    rule.check(members.get(key), &path.push(key))
}

/// Like [`member`], but an absent key is accepted as `None`.
pub fn optional_member<R: Rule>(
    rule: &R,
    members: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
) -> RuleResult<Option<R::Output>> {
    match members.get(key) {
        None => Validation::success(None),
        Some(value) => rule.check(Some(value), &path.push(key)).map(Some),
    }
}
