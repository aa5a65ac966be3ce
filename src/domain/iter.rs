// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iteration over a value's direct children.
//!
//! Iterators are derived fresh from a [`Value`](crate::domain::Value) on each
//! call, never stored on it, so iteration is restartable. Both iterator types
//! hold a shared handle to the parent node, a cursor, and the parent's path;
//! every yielded child carries a correctly extended path.

use crate::domain::node::Node;
use crate::domain::path::Path;
use crate::domain::value::Value;
use std::sync::Arc;

/// Iterator over the direct children of a sequence or mapping.
///
/// Dual-mode: sequence children are yielded with `[i]` path segments under a
/// 0-based running index; mapping children are yielded in source key order
/// with `.key` path segments derived from the entry.
#[derive(Clone, Debug)]
pub struct Iter {
    node: Option<Arc<Node>>,
    cursor: usize,
    path: Path,
}

impl Iter {
    pub(crate) fn empty(path: Path) -> Self {
        Iter {
            node: None,
            cursor: 0,
            path,
        }
    }

    pub(crate) fn over(node: Arc<Node>, path: Path) -> Self {
        Iter {
            node: Some(node),
            cursor: 0,
            path,
        }
    }

    fn remaining(&self) -> usize {
        self.node
            .as_ref()
            .map_or(0, |node| node.child_count().saturating_sub(self.cursor))
    }
}

impl Iterator for Iter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let node = self.node.as_ref()?;
        let child = match node.as_ref() {
            Node::Sequence(items) => {
                let item = items.get(self.cursor)?;
                Value::make_child_index(Some(item.clone()), &self.path, self.cursor)
            }
            Node::Mapping(entries) => {
                let (key, item) = entries.get(self.cursor)?;
                Value::make_child_key(Some(item.clone()), &self.path, key)
            }
            _ => return None,
        };
        self.cursor += 1;
        Some(child)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}

/// Iterator over `(key, child)` entries of a mapping, in source key order.
#[derive(Clone, Debug)]
pub struct Entries {
    node: Option<Arc<Node>>,
    cursor: usize,
    path: Path,
}

impl Entries {
    pub(crate) fn empty(path: Path) -> Self {
        Entries {
            node: None,
            cursor: 0,
            path,
        }
    }

    pub(crate) fn over(node: Arc<Node>, path: Path) -> Self {
        Entries {
            node: Some(node),
            cursor: 0,
            path,
        }
    }

    fn remaining(&self) -> usize {
        self.node
            .as_ref()
            .map_or(0, |node| node.child_count().saturating_sub(self.cursor))
    }
}

impl Iterator for Entries {
    type Item = (String, Value);

    fn next(&mut self) -> Option<(String, Value)> {
        let node = self.node.as_ref()?;
        let (key, item) = match node.as_ref() {
            Node::Mapping(entries) => entries.get(self.cursor)?,
            _ => return None,
        };
        let child = Value::make_child_key(Some(item.clone()), &self.path, key);
        self.cursor += 1;
        Some((key.clone(), child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Entries {}
