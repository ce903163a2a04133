//! Social links whose username is checked against the platform's rules.

use crate::core::{FieldPath, Rule, RuleResult, Violation, ViolationKind};
use crate::profile::types::SpecialLink;
use crate::rules::object::{member, object};
use crate::rules::{EnumRule, StringRule};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use stillwater::validation::Validation;

/// Username constraint of one platform.
pub struct UsernamePattern {
    regex: Regex,
    max_len: Option<usize>,
}

impl UsernamePattern {
    fn new(pattern: &str, max_len: Option<usize>) -> Self {
        Self {
            regex: Regex::new(pattern).expect("platform username pattern is a valid regex"),
            max_len,
        }
    }

    pub fn is_match(&self, username: &str) -> bool {
        let fits = self.max_len.map_or(true, |max| username.chars().count() <= max);
        fits && self.regex.is_match(username)
    }
}

// A GitHub hyphen must be followed by an alphanumeric; the whole name is capped at 39.
static USERNAME_PATTERNS: LazyLock<HashMap<SpecialLink, UsernamePattern>> = LazyLock::new(|| {
    [
        (SpecialLink::GitHub, r"^[a-zA-Z0-9](?:[a-zA-Z0-9]|-[a-zA-Z0-9])*$", Some(39)),
        (SpecialLink::Instagram, r"^[a-zA-Z0-9._]+$", None),
        (SpecialLink::Twitter, r"^[a-zA-Z0-9_]+$", None),
        (SpecialLink::YouTube, r"^[a-zA-Z0-9_-]+$", None),
        (SpecialLink::Twitch, r"^[a-zA-Z0-9_]{4,25}$", None),
        (SpecialLink::TikTok, r"^[a-zA-Z0-9._]+$", None),
        (SpecialLink::Patreon, r"^[a-zA-Z0-9_-]+$", None),
        (SpecialLink::Snapchat, r"^[a-zA-Z0-9._-]+$", None),
        (SpecialLink::LinkedIn, r"^[a-zA-Z0-9-]+$", None),
        (SpecialLink::Facebook, r"^[a-zA-Z0-9.]+$", None),
        (SpecialLink::Spotify, r"^[a-zA-Z0-9]+$", None),
    ]
    .into_iter()
    .map(|(platform, pattern, max_len)| (platform, UsernamePattern::new(pattern, max_len)))
    .collect()
});

/// Username pattern of `platform`, if it has one.
pub fn username_pattern(platform: SpecialLink) -> Option<&'static UsernamePattern> {
    USERNAME_PATTERNS.get(&platform)
}

/// Whether `username` is acceptable on `platform`.
///
/// Platforms without a registered pattern accept any username.
pub fn is_valid_username(platform: SpecialLink, username: &str) -> bool {
    matches_platform(&USERNAME_PATTERNS, platform, username)
}

fn matches_platform(
    patterns: &HashMap<SpecialLink, UsernamePattern>,
    platform: SpecialLink,
    username: &str,
) -> bool {
    match patterns.get(&platform) {
        Some(pattern) => pattern.is_match(username),
        None => true,
    }
}

/// A validated social link.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Special {
    #[serde(rename = "type")]
    pub kind: SpecialLink,
    pub username: String,
}

/// Rule for `{ type, username }` social links.
///
/// The username is matched against the platform's pattern only after both
/// members parsed; a mismatch is reported once, on the link object itself.
pub struct SpecialRule {
    platform: EnumRule<SpecialLink>,
    username: StringRule,
}

impl SpecialRule {
    pub fn new() -> Self {
        Self {
            platform: EnumRule::new("special link type"),
            username: StringRule::builder("special link username").build(),
        }
    }
}

impl Default for SpecialRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for SpecialRule {
    type Output = Special;

    fn name(&self) -> &str {
        "special"
    }

    fn check(&self, value: Option<&Value>, path: &FieldPath) -> RuleResult<Special> {
        let members = match object(value, path) {
            Validation::Success(members) => members,
            Validation::Failure(errors) => return Validation::Failure(errors),
        };

        let shape = member(&self.platform, members, "type", path)
            .and(member(&self.username, members, "username", path));
        let (kind, username) = match shape {
            Validation::Success(parsed) => parsed,
            Validation::Failure(errors) => return Validation::Failure(errors),
        };

        if is_valid_username(kind, &username) {
            Validation::success(Special { kind, username })
        } else {
            tracing::debug!(platform = %kind, "username rejected by platform pattern");
            Validation::fail(Violation::new(
                path.clone(),
                ViolationKind::CrossFieldMismatch,
                "Invalid username.",
            ))
        }
    }
}
