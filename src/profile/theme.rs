//! Profile theme: background, button and font styling.

use crate::core::{FieldPath, Rule, RuleResult};
use crate::profile::types::{BackgroundType, ButtonStyle, Font};
use crate::rules::object::{member, object};
use crate::rules::{EnumRule, StringRule};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;
use stillwater::validation::Validation;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{8}|[A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$")
        .expect("hex color pattern is a valid regex")
});

/// `#` followed by 3, 6 or 8 hex digits.
pub fn color() -> StringRule {
    StringRule::builder("color")
        .required_message("Color is required.")
        .invalid_type_message("Color must be a string.")
        .pattern(&HEX_COLOR, "Invalid hexadecimal color code")
        .build()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundType,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub style: ButtonStyle,
    pub color: String,
    pub font_color: String,
}

/// A validated theme.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub background: Background,
    pub button: Button,
    pub font: Font,
    pub font_color: String,
}

/// Rule for a whole theme object.
///
/// Every member is checked; violations from all nested members are
/// reported together with their full path (`background.type`,
/// `button.fontColor`, ...).
pub struct ThemeRule {
    background_type: EnumRule<BackgroundType>,
    button_style: EnumRule<ButtonStyle>,
    font: EnumRule<Font>,
    color: StringRule,
}

impl ThemeRule {
    pub fn new() -> Self {
        Self {
            background_type: EnumRule::new("background type")
                .required_message("Background type is required.")
                .invalid_type_message("Background type must be a number."),
            button_style: EnumRule::new("button style")
                .required_message("Button style is required.")
                .invalid_type_message("Button style must be a number."),
            font: EnumRule::new("font")
                .required_message("Font is required.")
                .invalid_type_message("Font must be a number."),
            color: color(),
        }
    }

    fn background(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<Background> {
        let members = match object(value, path) {
            Validation::Success(members) => members,
            Validation::Failure(errors) => return Validation::Failure(errors),
        };

        member(&self.background_type, members, "type", path)
            .and(member(&self.color, members, "color", path))
            .map(|(kind, color)| Background { kind, color })
    }

    fn button(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<Button> {
        let members = match object(value, path) {
            Validation::Success(members) => members,
            Validation::Failure(errors) => return Validation::Failure(errors),
        };

        member(&self.button_style, members, "style", path)
            .and(member(&self.color, members, "color", path))
            .and(member(&self.color, members, "fontColor", path))
            .map(|((style, color), font_color)| Button {
                style,
                color,
                font_color,
            })
    }
}

impl Default for ThemeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ThemeRule {
    type Output = Theme;

    fn name(&self) -> &str {
        "theme"
    }

    fn check(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<Theme> {
        let members = match object(value, path) {
            Validation::Success(members) => members,
            Validation::Failure(errors) => return Validation::Failure(errors),
        };

        let background = self.background(members.get("background"), &path.push("background"));
        let button = self.button(members.get("button"), &path.push("button"));
        let font = member(&self.font, members, "font", path);
        let font_color = member(&self.color, members, "fontColor", path);

        background
            .and(button)
            .and(font)
            .and(font_color)
            .map(|(((background, button), font), font_color)| Theme {
                background,
                button,
                font,
                font_color,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Violation, ViolationKind};
    use serde_json::json;

    fn valid_theme() -> Value {
        json!({
            "background": { "type": 0, "color": "#fff" },
            "button": { "style": 1, "color": "#000000", "fontColor": "#00000000" },
            "font": 2,
            "fontColor": "#123"
        })
    }

    fn violations(result: RuleResult<Theme>) -> Vec<Violation> {
        match result {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(theme) => panic!("Expected failures, got {theme:?}"),
        }
    }

    #[test]
    fn color_accepts_three_six_and_eight_digits() {
        for candidate in ["#fff", "#FfF", "#a1b2c3", "#A1B2C3D4"] {
            assert!(color().validate(&json!(candidate)).is_success(), "{candidate}");
        }
    }

    #[test]
    fn color_rejects_other_shapes() {
        for candidate in ["#12", "#1234", "#1234567", "fff", "red", "#ggg", "#fff "] {
            assert!(color().validate(&json!(candidate)).is_failure(), "{candidate}");
        }
    }

    #[test]
    fn valid_theme_is_normalized() {
        let theme = ThemeRule::new().validate(&valid_theme());

        assert_eq!(
            theme,
            Validation::success(Theme {
                background: Background {
                    kind: BackgroundType::Flat,
                    color: "#fff".to_string(),
                },
                button: Button {
                    style: ButtonStyle::Outline,
                    color: "#000000".to_string(),
                    font_color: "#00000000".to_string(),
                },
                font: Font::Poppins,
                font_color: "#123".to_string(),
            })
        );
    }

    #[test]
    fn bad_color_is_reported_at_its_nested_path() {
        let cases = [
            ("/background/color", "background.color"),
            ("/button/color", "button.color"),
            ("/button/fontColor", "button.fontColor"),
            ("/fontColor", "fontColor"),
        ];

        for (pointer, expected) in cases {
            let mut theme = valid_theme();
            *theme.pointer_mut(pointer).unwrap() = json!("red");

            let found = violations(ThemeRule::new().validate(&theme));
            assert_eq!(found.len(), 1, "{pointer}");
            assert_eq!(found[0].path.to_string(), expected);
            assert_eq!(found[0].message, "Invalid hexadecimal color code");
            assert_eq!(found[0].kind, ViolationKind::FormatMismatch);
        }
    }

    #[test]
    fn violations_accumulate_across_the_whole_theme() {
        let theme = json!({
            "background": { "type": "flat", "color": "red" },
            "button": { "style": 9 },
            "fontColor": 5
        });

        let found: Vec<(String, String)> = violations(ThemeRule::new().validate(&theme))
            .into_iter()
            .map(|v| (v.path.to_string(), v.message))
            .collect();

        assert_eq!(
            found,
            vec![
                (
                    "background.type".to_string(),
                    "Background type must be a number.".to_string()
                ),
                (
                    "background.color".to_string(),
                    "Invalid hexadecimal color code".to_string()
                ),
                (
                    "button.style".to_string(),
                    "Invalid enum value. Expected 0 | 1 | 2 | 3, received '9'".to_string()
                ),
                ("button.color".to_string(), "Color is required.".to_string()),
                ("button.fontColor".to_string(), "Color is required.".to_string()),
                ("font".to_string(), "Font is required.".to_string()),
                ("fontColor".to_string(), "Color must be a string.".to_string()),
            ]
        );
    }

    #[test]
    fn non_object_members_are_wrong_type() {
        let theme = json!({
            "background": "#fff",
            "button": { "style": 0, "color": "#000", "fontColor": "#fff" },
            "font": 0,
            "fontColor": "#123"
        });

        let found = violations(ThemeRule::new().validate(&theme));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path.to_string(), "background");
        assert_eq!(found[0].message, "Expected object, received string");
    }

    #[test]
    fn serializes_with_client_field_names() {
        let Validation::Success(theme) = ThemeRule::new().validate(&valid_theme()) else {
            panic!("valid theme rejected");
        };
        assert_eq!(serde_json::to_value(&theme).unwrap(), valid_theme());
    }
}
