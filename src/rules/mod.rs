//! Reusable rule building blocks.
//!
//! - [`StringRule`]: strings with length, pattern, email, URL and predicate checks
//! - [`EnumRule`]: integer tags of a closed [`TagEnum`]
//! - [`object`]: object shape and member lookup helpers for composite rules

pub mod enumeration;
pub mod object;
pub mod string;

pub use enumeration::{EnumRule, TagEnum};
pub use string::{StringRule, StringRuleBuilder};
