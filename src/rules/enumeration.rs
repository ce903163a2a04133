//! Membership rules for closed integer-tag enumerations.

use crate::core::{type_name, FieldPath, Rule, RuleResult, Violation, ViolationKind};
use serde_json::{Number, Value};
use std::marker::PhantomData;
use stillwater::validation::Validation;

/// A closed set of named integer tags.
///
/// Implementors list every member in [`TagEnum::ALL`]; membership checks
/// are a lookup in that table.
pub trait TagEnum: Copy + Send + Sync + 'static {
    /// Every member, in tag order
    const ALL: &'static [Self];

    fn tag(self) -> u8;

    fn name(self) -> &'static str;

    fn from_tag(tag: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| i64::from(member.tag()) == tag)
    }
}

/// Rule accepting the integer tag of a member of `E`.
///
/// Absent values, non-numeric values and numbers outside the tag set each
/// get their own violation kind and message.
pub struct EnumRule<E: TagEnum> {
    name: String,
    required_message: String,
    invalid_type_message: String,
    _members: PhantomData<E>,
}

impl<E: TagEnum> EnumRule<E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_message: "Required".to_string(),
            invalid_type_message: "Expected number, received {received}".to_string(),
            _members: PhantomData,
        }
    }

    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    /// `{received}` is replaced by the JSON type of the value.
    pub fn invalid_type_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_type_message = message.into();
        self
    }

    fn not_a_member(&self, received: &serde_json::Number, path: &FieldPath) -> Violation {
        let expected = E::ALL
            .iter()
            .map(|member| member.tag().to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        Violation::new(
            path.clone(),
            ViolationKind::EnumMismatch,
            format!("Invalid enum value. Expected {expected}, received '{received}'"),
        )
    }
}

impl<E: TagEnum> Rule for EnumRule<E> {
    type Output = E;

    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<E> {
        match value {
            None => Validation::fail(Violation::missing(
                path.clone(),
                self.required_message.clone(),
            )),
            Some(Value::Number(number)) => match integer_tag(number).and_then(E::from_tag) {
                Some(member) => Validation::success(member),
                None => Validation::fail(self.not_a_member(number, path)),
            },
            Some(other) => Validation::fail(Violation::wrong_type(
                path.clone(),
                self.invalid_type_message.replace("{received}", type_name(other)),
            )),
        }
    }
}

/// Integer value of a JSON number; `1.0` counts as the tag `1`.
fn integer_tag(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|float| float.fract() == 0.0)
            .map(|float| float as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Shade {
        Light,
        Dark,
    }

    impl TagEnum for Shade {
        const ALL: &'static [Self] = &[Shade::Light, Shade::Dark];

        fn tag(self) -> u8 {
            self as u8
        }

        fn name(self) -> &'static str {
            match self {
                Shade::Light => "Light",
                Shade::Dark => "Dark",
            }
        }
    }

    fn only_violation(result: RuleResult<Shade>) -> Violation {
        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                errors.iter().next().cloned().unwrap()
            }
            Validation::Success(shade) => panic!("Expected failure, got {shade:?}"),
        }
    }

    fn rule() -> EnumRule<Shade> {
        EnumRule::new("shade")
            .required_message("Shade is required.")
            .invalid_type_message("Shade must be a number.")
    }

    #[test]
    fn accepts_declared_tags() {
        assert_eq!(rule().validate(&json!(0)), Validation::success(Shade::Light));
        assert_eq!(rule().validate(&json!(1)), Validation::success(Shade::Dark));
    }

    #[test]
    fn integer_valued_floats_are_tags() {
        assert_eq!(rule().validate(&json!(1.0)), Validation::success(Shade::Dark));
        assert_eq!(rule().validate(&json!(-0.0)), Validation::success(Shade::Light));

        let far = only_violation(rule().validate(&json!(1e300)));
        assert_eq!(far.kind, ViolationKind::EnumMismatch);
    }

    #[test]
    fn missing_value() {
        let violation = only_violation(rule().check(None, &FieldPath::root()));
        assert_eq!(violation.kind, ViolationKind::Missing);
        assert_eq!(violation.message, "Shade is required.");
    }

    #[test]
    fn non_numeric_value_is_wrong_type() {
        for value in [json!("Dark"), json!(null), json!([1]), json!(true)] {
            let violation = only_violation(rule().validate(&value));
            assert_eq!(violation.kind, ViolationKind::WrongType);
            assert_eq!(violation.message, "Shade must be a number.");
        }
    }

    #[test]
    fn undeclared_numbers_are_enum_mismatches() {
        let violation = only_violation(rule().validate(&json!(7)));
        assert_eq!(violation.kind, ViolationKind::EnumMismatch);
        assert_eq!(
            violation.message,
            "Invalid enum value. Expected 0 | 1, received '7'"
        );

        let fractional = only_violation(rule().validate(&json!(1.5)));
        assert_eq!(fractional.kind, ViolationKind::EnumMismatch);

        let negative = only_violation(rule().validate(&json!(-1)));
        assert_eq!(negative.kind, ViolationKind::EnumMismatch);
    }

    #[test]
    fn default_messages() {
        let plain: EnumRule<Shade> = EnumRule::new("shade");
        assert_eq!(
            only_violation(plain.validate(&json!("x"))).message,
            "Expected number, received string"
        );
        assert_eq!(
            only_violation(plain.check(None, &FieldPath::root())).message,
            "Required"
        );
    }
}
