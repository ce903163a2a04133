//! Violations and error reporting.

use crate::core::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Non-empty list of violations produced by a failed rule.
pub type Violations = NonEmptyVec<Violation>;

/// Category of a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required value absent
    Missing,

    /// Value present but not the expected primitive or shape
    WrongType,

    /// Length constraint violated
    OutOfRange,

    /// Pattern, URL or email grammar failure
    FormatMismatch,

    /// Value not a member of a closed tag set
    EnumMismatch,

    /// Refinement reading more than one member failed
    CrossFieldMismatch,

    /// Single-value predicate failed
    Refinement,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Missing => "missing",
            Self::WrongType => "wrong_type",
            Self::OutOfRange => "out_of_range",
            Self::FormatMismatch => "format_mismatch",
            Self::EnumMismatch => "enum_mismatch",
            Self::CrossFieldMismatch => "cross_field_mismatch",
            Self::Refinement => "refinement",
        };
        f.write_str(name)
    }
}

/// A structured complaint about one field of the validated value.
///
/// `message` is meant to be shown to end users as is; `path` locates the
/// form field to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", render(.path, .message))]
pub struct Violation {
    pub path: FieldPath,
    pub kind: ViolationKind,
    pub message: String,
}

fn render(path: &FieldPath, message: &str) -> String {
    if path.is_root() {
        message.to_string()
    } else {
        format!("{path}: {message}")
    }
}

impl Violation {
    pub fn new(path: FieldPath, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
        }
    }

    pub fn missing(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::Missing, message)
    }

    pub fn wrong_type(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::WrongType, message)
    }
}

/// Every violation of a rejected value, as an error type.
///
/// Obtained from [`crate::core::into_result`]; lets API handlers
/// propagate rejections with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation error(s): {}", .0.len(), join(.0))]
pub struct ValidationErrors(Vec<Violation>);

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Messages attached to `path`, in report order.
    pub fn messages_at(&self, path: &FieldPath) -> Vec<&str> {
        self.0
            .iter()
            .filter(|v| &v.path == path)
            .map(|v| v.message.as_str())
            .collect()
    }

    /// Group messages for form rendering.
    ///
    /// Violations on the root path become form-level errors; the rest are
    /// keyed by their dotted path.
    pub fn flatten(&self) -> FlattenedErrors {
        let mut flattened = FlattenedErrors::default();
        for violation in &self.0 {
            if violation.path.is_root() {
                flattened.form_errors.push(violation.message.clone());
            } else {
                flattened
                    .field_errors
                    .entry(violation.path.to_string())
                    .or_default()
                    .push(violation.message.clone());
            }
        }
        flattened
    }
}

impl From<Violations> for ValidationErrors {
    fn from(violations: Violations) -> Self {
        Self(violations.iter().cloned().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Violations grouped the way form code consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedErrors {
    pub form_errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}
