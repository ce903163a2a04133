//! Profile links and page metadata.

use crate::core::{FieldPath, Rule, RuleResult};
use crate::profile::theme::color;
use crate::rules::object::{member, object, optional_member};
use crate::rules::StringRule;
use serde::Serialize;
use serde_json::Value;
use stillwater::validation::Validation;

pub fn url() -> StringRule {
    StringRule::builder("url")
        .required_message("URL is required.")
        .invalid_type_message("URL must be a string.")
        .url("Must be a valid URL.")
        .build()
}

/// Link title: 1 to 60 characters, not only whitespace.
pub fn title() -> StringRule {
    StringRule::builder("title")
        .min_len(1, "Title must be at least 1 character long.")
        .max_len(60, "Title must be at most 60 characters long.")
        .refine(
            |value| value.chars().any(|c| !c.is_whitespace()),
            "Title cannot be empty.",
        )
        .build()
}

/// Optional image URL shared by links and metadata.
fn image() -> StringRule {
    StringRule::builder("image").url("Invalid url").build()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Rule for `{ url, title, image? }`.
pub struct LinkRule {
    url: StringRule,
    title: StringRule,
    image: StringRule,
}

impl LinkRule {
    pub fn new() -> Self {
        Self {
            url: url(),
            title: title(),
            image: image(),
        }
    }
}

impl Default for LinkRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for LinkRule {
    type Output = Link;

    fn name(&self) -> &str {
        "link"
    }

    fn check(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<Link> {
        let members = match object(value, path) {
            Validation::Success(members) => members,
            Validation::Failure(errors) => return Validation::Failure(errors),
        };

        member(&self.url, members, "url", path)
            .and(member(&self.title, members, "title", path))
            .and(optional_member(&self.image, members, "image", path))
            .map(|((url, title), image)| Link { url, title, image })
    }
}

/// Page metadata used for previews.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Rule for `{ title, description, color, image? }`.
///
/// `title` here only has a length cap; it is not the link [`title`] rule.
pub struct MetaRule {
    title: StringRule,
    description: StringRule,
    color: StringRule,
    image: StringRule,
}

impl MetaRule {
    pub fn new() -> Self {
        Self {
            title: StringRule::builder("meta title")
                .max_len(60, "Title must be at most 60 characters long.")
                .build(),
            description: StringRule::builder("meta description")
                .max_len(160, "Description must be at most 160 characters long.")
                .build(),
            color: color(),
            image: image(),
        }
    }
}

impl Default for MetaRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for MetaRule {
    type Output = Meta;

    fn name(&self) -> &str {
        "meta"
    }

    fn check(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<Meta> {
        let members = match object(value, path) {
            Validation::Success(members) => members,
            Validation::Failure(errors) => return Validation::Failure(errors),
        };

        member(&self.title, members, "title", path)
            .and(member(&self.description, members, "description", path))
            .and(member(&self.color, members, "color", path))
            .and(optional_member(&self.image, members, "image", path))
            .map(|(((title, description), color), image)| Meta {
                title,
                description,
                color,
                image,
            })
    }
}
