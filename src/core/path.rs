//! Field paths inside structured values.
//!
//! A path is an ordered list of segments leading from the validated root
//! value to the offending member. Scalar rules report the empty (root) path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a [`FieldPath`]: an object key or an array index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Location of a value within a structured input.
///
/// Paths are immutable; [`FieldPath::push`] returns an extended copy so the
/// same parent path can be shared by every member of an object.
///
/// # Example
///
/// ```rust
/// use biolink_rules::core::FieldPath;
///
/// let path = FieldPath::root().push("button").push("fontColor");
/// assert_eq!(path.to_string(), "button.fontColor");
///
/// let indexed = FieldPath::root().push("links").push(2usize).push("url");
/// assert_eq!(indexed.to_string(), "links[2].url");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The empty path, pointing at the validated value itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn push(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if position == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_empty() {
        let root = FieldPath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn push_leaves_parent_untouched() {
        let parent = FieldPath::root().push("background");
        let child = parent.push("color");

        assert_eq!(parent.segments().len(), 1);
        assert_eq!(child.to_string(), "background.color");
    }

    #[test]
    fn index_segments_render_with_brackets() {
        let path: FieldPath = [PathSegment::from(0usize), PathSegment::from("title")]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "[0].title");
    }

    #[test]
    fn serializes_as_array_of_keys_and_indices() {
        let path = FieldPath::root().push("links").push(1usize).push("url");
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json, serde_json::json!(["links", 1, "url"]));
    }
}
