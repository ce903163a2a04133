//! Account fields: username, password, email and bio.

use crate::core::ViolationKind;
use crate::rules::StringRule;
use regex::Regex;
use std::sync::LazyLock;

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]*$").expect("alphanumeric pattern is a valid regex"));

/// Characters accepted as the password's special character.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*()-_=+{};:,<.>";

/// Name that may never be claimed as a username
pub const RESERVED_USERNAME: &str = "admin";

/// The enforced minimum is 1 even though the message mentions 3.
pub fn username() -> StringRule {
    StringRule::builder("username")
        .required_message("Username is required.")
        .invalid_type_message("Username must be a string.")
        .min_len(1, "Username must be at least 3 characters long.")
        .max_len(15, "Username must be at most 15 characters long.")
        .pattern(
            &ALPHANUMERIC,
            "Username should only contain alphanumeric characters.",
        )
        .refine(
            |value| value != RESERVED_USERNAME,
            "Username cannot be \"admin\".",
        )
        .build()
}

/// True when `value` has a lowercase letter, an uppercase letter, a digit
/// and a special character, in any order.
pub fn has_password_classes(value: &str) -> bool {
    let lower = value.chars().any(|c| c.is_ascii_lowercase());
    let upper = value.chars().any(|c| c.is_ascii_uppercase());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    let special = value.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    lower && upper && digit && special
}

const PASSWORD_CLASSES_MESSAGE: &str = "Password should contain at least one lowercase letter, \
     one uppercase letter, one digit, and one special character.";

pub fn password() -> StringRule {
    StringRule::builder("password")
        .required_message("Password is required.")
        .invalid_type_message("Password must be a string.")
        .min_len(8, "Password must be at least 8 characters long.")
        .max_len(30, "Password must be at most 30 characters long.")
        .refine_as(
            ViolationKind::FormatMismatch,
            has_password_classes,
            PASSWORD_CLASSES_MESSAGE,
        )
        .build()
}

pub fn email() -> StringRule {
    StringRule::builder("email")
        .required_message("Email is required.")
        .invalid_type_message("Email must be a string.")
        .email("Email must be a valid email address.")
        .build()
}

pub fn bio() -> StringRule {
    StringRule::builder("bio")
        .required_message("Bio is required.")
        .invalid_type_message("Bio must be a string.")
        .max_len(160, "Bio must be at most 160 characters long.")
        .build()
}
