//! Biolink rules: accumulating validation for link-in-bio profiles
//!
//! Every rule is a pure function from a candidate JSON value to either a
//! normalized value or ALL of its violations, built on Stillwater's
//! `Validation` type. Rules never panic and never stop at the first error:
//! users get complete feedback for a form in a single pass.
//!
//! # Core Concepts
//!
//! - **Rule**: stateless validator shared by every caller ([`core::Rule`])
//! - **Violation**: field path, kind and user-facing message ([`core::Violation`])
//! - **Composite rules**: objects whose members are checked independently
//!   and whose violations are merged by path
//!
//! # Example
//!
//! ```rust
//! use biolink_rules::core::Rule;
//! use biolink_rules::profile::validators;
//! use serde_json::json;
//! use stillwater::validation::Validation;
//!
//! let theme = json!({
//!     "background": { "type": 0, "color": "#fff" },
//!     "button": { "style": 0, "color": "red", "fontColor": "#000" },
//!     "font": 0,
//!     "fontColor": "#123"
//! });
//!
//! match validators().theme().validate(&theme) {
//!     Validation::Failure(violations) => {
//!         let first = violations.iter().next().unwrap();
//!         assert_eq!(first.path.to_string(), "button.color");
//!         assert_eq!(first.message, "Invalid hexadecimal color code");
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod core;
pub mod profile;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{FieldPath, Rule, RuleResult, ValidationErrors, Violation, ViolationKind};
pub use crate::profile::{validators, FieldValidators};
