// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic paths identifying a value's location in a document.
//!
//! This module provides the [`Path`] type, an immutable root-to-leaf chain of
//! map keys and sequence indices. Paths exist purely for diagnostics: every
//! navigation step appends exactly one segment and returns a new `Path`, and
//! errors render the path into a single human-readable string.

use std::fmt;
use std::sync::Arc;

/// One step of a [`Path`]: a mapping key or a sequence index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A mapping key, rendered as `.key` (no separator before the very first segment).
    Key(String),
    /// A sequence index, rendered as `[index]` with no separator.
    Index(usize),
}

/// An immutable root-to-leaf chain of segments identifying a value's location.
///
/// Paths are persistent: extending a path shares the parent chain instead of
/// copying it, so deeply nested documents do not pay quadratic copying costs.
/// A parent's path is never mutated by extending a child.
///
/// # Rendering
///
/// - the root path renders as the empty string
/// - each key segment appends `.key`, except that no separator precedes the
///   very first segment
/// - each index segment appends `[index]`
///
/// # Examples
///
/// ```
/// use doctree::domain::path::Path;
///
/// let path = Path::root().with_key("a").with_index(2).with_key("b");
/// assert_eq!(path.render(), "a[2].b");
/// assert_eq!(Path::root().render(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    head: Option<Arc<PathNode>>,
}

#[derive(Debug, PartialEq, Eq)]
struct PathNode {
    parent: Option<Arc<PathNode>>,
    segment: Segment,
}

impl Path {
    /// Returns the empty path of a document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `true` if this is the empty root path.
    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a new path with a mapping key appended.
    ///
    /// The receiver is left untouched; the new path shares the receiver's
    /// segment chain.
    #[must_use]
    pub fn with_key(&self, key: &str) -> Path {
        self.push(Segment::Key(key.to_string()))
    }

    /// Returns a new path with a sequence index appended.
    #[must_use]
    pub fn with_index(&self, index: usize) -> Path {
        self.push(Segment::Index(index))
    }

    fn push(&self, segment: Segment) -> Path {
        Path {
            head: Some(Arc::new(PathNode {
                parent: self.head.clone(),
                segment,
            })),
        }
    }

    /// Returns the segments in root-to-leaf order.
    ///
    /// # Examples
    ///
    /// ```
    /// use doctree::domain::path::{Path, Segment};
    ///
    /// let path = Path::root().with_key("shards").with_index(0);
    /// assert_eq!(
    ///     path.segments(),
    ///     vec![Segment::Key("shards".to_string()), Segment::Index(0)]
    /// );
    /// ```
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            segments.push(node.segment.clone());
            cursor = node.parent.as_deref();
        }
        segments.reverse();
        segments
    }

    /// Renders the path to its diagnostic string form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in self.segments() {
            match segment {
                Segment::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(&key);
                }
                Segment::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
