//! Validation rules for link-in-bio profiles.
//!
//! Rules are built once and shared process-wide through [`validators`].
//!
//! # Example
//!
//! ```rust
//! use biolink_rules::core::{into_result, Rule};
//! use biolink_rules::profile::validators;
//! use serde_json::json;
//!
//! let link = json!({ "url": "https://example.com", "title": "   " });
//! let errors = into_result(validators().link().validate(&link)).unwrap_err();
//!
//! let flattened = errors.flatten();
//! assert_eq!(flattened.field_errors["title"], vec!["Title cannot be empty."]);
//! ```

pub mod account;
pub mod links;
pub mod special;
pub mod theme;
pub mod types;

use crate::rules::StringRule;
use std::sync::LazyLock;

pub use links::{Link, LinkRule, Meta, MetaRule};
pub use special::{Special, SpecialRule};
pub use theme::{Background, Button, Theme, ThemeRule};
pub use types::{BackgroundType, ButtonStyle, Font, SpecialLink};

/// Every profile rule, built once.
pub struct FieldValidators {
    username: StringRule,
    password: StringRule,
    email: StringRule,
    bio: StringRule,
    url: StringRule,
    title: StringRule,
    theme: ThemeRule,
    special: SpecialRule,
    link: LinkRule,
    meta: MetaRule,
}

impl FieldValidators {
    pub fn new() -> Self {
        Self {
            username: account::username(),
            password: account::password(),
            email: account::email(),
            bio: account::bio(),
            url: links::url(),
            title: links::title(),
            theme: ThemeRule::new(),
            special: SpecialRule::new(),
            link: LinkRule::new(),
            meta: MetaRule::new(),
        }
    }

    pub fn username(&self) -> &StringRule {
        &self.username
    }

    pub fn password(&self) -> &StringRule {
        &self.password
    }

    pub fn email(&self) -> &StringRule {
        &self.email
    }

    pub fn bio(&self) -> &StringRule {
        &self.bio
    }

    pub fn url(&self) -> &StringRule {
        &self.url
    }

    pub fn title(&self) -> &StringRule {
        &self.title
    }

    pub fn theme(&self) -> &ThemeRule {
        &self.theme
    }

    pub fn special(&self) -> &SpecialRule {
        &self.special
    }

    pub fn link(&self) -> &LinkRule {
        &self.link
    }

    pub fn meta(&self) -> &MetaRule {
        &self.meta
    }
}

impl Default for FieldValidators {
    fn default() -> Self {
        Self::new()
    }
}

static VALIDATORS: LazyLock<FieldValidators> = LazyLock::new(FieldValidators::new);

/// Process-wide rule set.
pub fn validators() -> &'static FieldValidators {
    &VALIDATORS
}
