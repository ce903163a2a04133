//! Core validation types: paths, violations and the rule abstraction.

pub mod path;
pub mod rule;
pub mod violation;

pub use path::{FieldPath, PathSegment};
pub use rule::{into_result, type_name, Refinement, Rule, RuleResult};
pub use violation::{FlattenedErrors, ValidationErrors, Violation, ViolationKind, Violations};
