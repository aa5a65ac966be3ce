// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed document graph.
//!
//! This module provides [`Node`], the tree type parser adapters lower raw text
//! into, and [`Kind`], the structural classification used throughout the error
//! taxonomy. Nodes are shared via `Arc`: handing out a subtree is a reference
//! count bump, and [`Node::deep_clone`] is the only way to obtain storage
//! that is independent of the source document.

use std::fmt;
use std::sync::Arc;

/// The structural kind of a navigation result.
///
/// `Missing` is not a node kind in the document itself; it is the distinguished
/// state of a navigation result whose requested key or index does not exist.
/// A missing value never compares equal to a present null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No such node exists in the document.
    Missing,
    /// The document's null literal.
    Null,
    /// A scalar with a textual representation.
    Scalar,
    /// A sequence of nodes.
    Sequence,
    /// A key-ordered mapping of string keys to nodes.
    Mapping,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Missing => "missing",
            Kind::Null => "null",
            Kind::Scalar => "scalar",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        };
        write!(f, "{}", name)
    }
}

/// A position in the parsed document graph.
///
/// Parser adapters produce this type; application code normally navigates it
/// through [`Value`](crate::domain::Value) rather than matching on it directly.
/// Scalars carry their raw textual representation, and mappings preserve the
/// source document's key order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use doctree::domain::node::{Kind, Node};
///
/// let node = Node::Mapping(vec![(
///     "port".to_string(),
///     Arc::new(Node::Scalar("26379".to_string())),
/// )]);
/// assert_eq!(node.kind(), Kind::Mapping);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    /// The null literal.
    Null,
    /// A scalar and its raw textual representation.
    Scalar(String),
    /// A sequence of child nodes.
    Sequence(Vec<Arc<Node>>),
    /// A mapping of string keys to child nodes, in source order.
    Mapping(Vec<(String, Arc<Node>)>),
}

impl Node {
    /// Returns the structural kind of this node.
    pub fn kind(&self) -> Kind {
        match self {
            Node::Null => Kind::Null,
            Node::Scalar(_) => Kind::Scalar,
            Node::Sequence(_) => Kind::Sequence,
            Node::Mapping(_) => Kind::Mapping,
        }
    }

    /// Returns the raw scalar text, or `None` for non-scalar nodes.
    pub fn scalar_text(&self) -> Option<&str> {
        match self {
            Node::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Looks up a mapping entry by key. Returns the first match in source order.
    pub fn get(&self, key: &str) -> Option<&Arc<Node>> {
        match self {
            Node::Mapping(entries) => entries
                .iter()
                .find(|(entry_key, _)| entry_key.as_str() == key)
                .map(|(_, child)| child),
            _ => None,
        }
    }

    /// Number of direct children; zero for null and scalar nodes.
    pub(crate) fn child_count(&self) -> usize {
        match self {
            Node::Sequence(items) => items.len(),
            Node::Mapping(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Recursively copies the subtree rooted here into fresh storage.
    pub fn deep_clone(&self) -> Arc<Node> {
        Arc::new(match self {
            Node::Null => Node::Null,
            Node::Scalar(text) => Node::Scalar(text.clone()),
            Node::Sequence(items) => {
                Node::Sequence(items.iter().map(|item| item.deep_clone()).collect())
            }
            Node::Mapping(entries) => Node::Mapping(
                entries
                    .iter()
                    .map(|(key, child)| (key.clone(), child.deep_clone()))
                    .collect(),
            ),
        })
    }
}
