// SPDX-License-Identifier: MIT OR Apache-2.0

//! The navigable document value.
//!
//! This module provides [`Value`], the public wrapper pairing a node handle
//! with its diagnostic [`Path`]. Subscripting an absent key or navigating
//! through a missing ancestor never fails; it produces a missing `Value`
//! whose path keeps growing, so the eventual extraction error still reports
//! where in the document the data was expected.
//!
//! # Ownership
//!
//! A `Value` shares storage with the document it was derived from: `clone()`
//! is a cheap handle copy with reference semantics. [`Value::deep_clone`] is
//! the only operation that produces storage-independent data; use it to hand
//! a subtree across threads or to outlive the source document.

use crate::domain::convert::FromScalar;
use crate::domain::errors::{DocError, Result};
use crate::domain::iter::{Entries, Iter};
use crate::domain::node::{Kind, Node};
use crate::domain::path::Path;
use std::sync::Arc;

/// A reference to a position in the document graph, or the distinguished
/// missing sentinel. Missing is not the same as the document's null literal.
#[derive(Clone, Debug)]
pub(crate) enum Handle {
    Missing,
    Present(Arc<Node>),
}

/// A navigable, type-checked view into a parsed document.
///
/// A `Value` is a lightweight handle: it holds a shared reference into the
/// document graph, the path from the document root, and a root flag. All type
/// and existence checking is deferred to the point of use: subscripting
/// returns a new `Value` (possibly missing), while typed extraction and
/// structural checks raise [`DocError`]s carrying the rendered path.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use doctree::domain::{Node, Value};
///
/// # fn main() -> doctree::domain::Result<()> {
/// let doc = Value::from_root(Arc::new(Node::Mapping(vec![(
///     "port".to_string(),
///     Arc::new(Node::Scalar("26379".to_string())),
/// )])));
///
/// assert_eq!(doc.at("port")?.as_i32()?, 26379);
/// assert!(doc.at("host")?.is_missing());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Value {
    handle: Handle,
    path: Path,
    is_root: bool,
}

impl Value {
    /// Attaches to a parsed document root.
    ///
    /// This is the only constructor producing a value with
    /// [`is_root`](Value::is_root) set; every subscript, iteration, or clone
    /// result is non-root.
    pub fn from_root(root: Arc<Node>) -> Self {
        Value {
            handle: Handle::Present(root),
            path: Path::root(),
            is_root: true,
        }
    }

    pub(crate) fn make_child_key(node: Option<Arc<Node>>, parent: &Path, key: &str) -> Self {
        Value {
            handle: node.map_or(Handle::Missing, Handle::Present),
            path: parent.with_key(key),
            is_root: false,
        }
    }

    pub(crate) fn make_child_index(node: Option<Arc<Node>>, parent: &Path, index: usize) -> Self {
        Value {
            handle: node.map_or(Handle::Missing, Handle::Present),
            path: parent.with_index(index),
            is_root: false,
        }
    }

    fn node(&self) -> Option<&Arc<Node>> {
        match &self.handle {
            Handle::Missing => None,
            Handle::Present(node) => Some(node),
        }
    }

    /// Returns the structural kind of this value; [`Kind::Missing`] for a
    /// navigation result whose key or index did not exist.
    pub fn kind(&self) -> Kind {
        self.node().map_or(Kind::Missing, |node| node.kind())
    }

    /// Renders the path from the document root to this value.
    ///
    /// The root path renders as the empty string.
    pub fn path(&self) -> String {
        self.path.render()
    }

    /// True only for the value constructed directly from a document root.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Subscripts by mapping key.
    ///
    /// Never fails for merely-absent data: a missing receiver, a null
    /// receiver, and a mapping without the key all yield a missing child whose
    /// path is extended with `key`, so later errors still report a sensible
    /// location. A present receiver of any other kind fails with
    /// [`DocError::TypeMismatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use doctree::domain::{Node, Value};
    ///
    /// # fn main() -> doctree::domain::Result<()> {
    /// let doc = Value::from_root(Arc::new(Node::Mapping(Vec::new())));
    /// let deep = doc.at("a")?.at("b")?.at("c")?;
    /// assert!(deep.is_missing());
    /// assert_eq!(deep.path(), "a.b.c");
    /// # Ok(())
    /// # }
    /// ```
    pub fn at(&self, key: &str) -> Result<Value> {
        match self.node() {
            None => Ok(Self::make_child_key(None, &self.path, key)),
            Some(node) => match node.as_ref() {
                Node::Null => Ok(Self::make_child_key(None, &self.path, key)),
                Node::Mapping(_) => Ok(Self::make_child_key(
                    node.get(key).cloned(),
                    &self.path,
                    key,
                )),
                _ => Err(self.type_mismatch("mapping")),
            },
        }
    }

    /// Subscripts by sequence index.
    ///
    /// A missing receiver yields a missing child with the index appended to
    /// its path. A present receiver must be sequence-or-null; an out-of-range
    /// index on a present receiver (null counts as size 0) fails with
    /// [`DocError::OutOfBounds`].
    pub fn at_index(&self, index: usize) -> Result<Value> {
        match self.node() {
            None => Ok(Self::make_child_index(None, &self.path, index)),
            Some(node) => match node.as_ref() {
                Node::Sequence(items) => match items.get(index) {
                    Some(item) => Ok(Self::make_child_index(
                        Some(item.clone()),
                        &self.path,
                        index,
                    )),
                    None => Err(DocError::OutOfBounds {
                        index,
                        size: items.len(),
                        path: self.path(),
                    }),
                },
                Node::Null => Err(DocError::OutOfBounds {
                    index,
                    size: 0,
                    path: self.path(),
                }),
                _ => Err(self.type_mismatch("sequence")),
            },
        }
    }

    /// Number of direct children; requires a mapping, sequence, or null
    /// receiver (null reports 0). A missing receiver fails with
    /// [`DocError::MemberMissing`].
    pub fn size(&self) -> Result<usize> {
        let node = self.check_not_missing()?;
        match node.as_ref() {
            Node::Null | Node::Sequence(_) | Node::Mapping(_) => Ok(node.child_count()),
            Node::Scalar(_) => Err(self.type_mismatch("sequence or mapping")),
        }
    }

    /// Returns an iterator over the direct children.
    ///
    /// Requires a mapping, sequence, or null receiver; iterating a null value
    /// yields an empty range. Sequence children carry `[i]` path segments with
    /// a 0-based running index; mapping children carry `.key` segments derived
    /// from the entry. Each call derives a fresh iterator from the value, so
    /// iteration is restartable.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use doctree::domain::{Node, Value};
    ///
    /// # fn main() -> doctree::domain::Result<()> {
    /// let doc = Value::from_root(Arc::new(Node::Sequence(vec![
    ///     Arc::new(Node::Scalar("a".to_string())),
    ///     Arc::new(Node::Scalar("b".to_string())),
    /// ])));
    ///
    /// let items: Vec<String> = doc
    ///     .try_iter()?
    ///     .map(|item| item.as_string())
    ///     .collect::<doctree::domain::Result<_>>()?;
    /// assert_eq!(items, vec!["a", "b"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_iter(&self) -> Result<Iter> {
        let node = self.check_not_missing()?;
        match node.as_ref() {
            Node::Null => Ok(Iter::empty(self.path.clone())),
            Node::Sequence(_) | Node::Mapping(_) => {
                Ok(Iter::over(node.clone(), self.path.clone()))
            }
            Node::Scalar(_) => Err(self.type_mismatch("sequence or mapping")),
        }
    }

    /// Returns an iterator over `(key, child)` entries of a mapping.
    ///
    /// Requires a mapping-or-null receiver; a null receiver yields an empty
    /// range. Use this where the entry names matter, e.g. when a document maps
    /// client names to their settings.
    pub fn entries(&self) -> Result<Entries> {
        let node = self.check_not_missing()?;
        match node.as_ref() {
            Node::Null => Ok(Entries::empty(self.path.clone())),
            Node::Mapping(_) => Ok(Entries::over(node.clone(), self.path.clone())),
            _ => Err(self.type_mismatch("mapping")),
        }
    }

    /// True iff the receiver is a present mapping containing `key`.
    ///
    /// Reports `false` rather than failing for missing, null, and non-mapping
    /// receivers, mirroring defensive lookup use-cases.
    pub fn has_member(&self, key: &str) -> bool {
        self.node().map_or(false, |node| node.get(key).is_some())
    }

    /// True iff the requested key or index did not exist in the document.
    pub fn is_missing(&self) -> bool {
        self.node().is_none()
    }

    /// True iff present and the underlying node is the null literal.
    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    /// True iff present and scalar. Any scalar is extractable as a string.
    pub fn is_string(&self) -> bool {
        self.kind() == Kind::Scalar
    }

    /// True iff present and a sequence.
    pub fn is_sequence(&self) -> bool {
        self.kind() == Kind::Sequence
    }

    /// True iff present and a mapping.
    pub fn is_mapping(&self) -> bool {
        self.kind() == Kind::Mapping
    }

    /// True iff the scalar text converts losslessly to `bool`.
    pub fn is_bool(&self) -> bool {
        self.is_convertible::<bool>()
    }

    /// True iff the scalar text converts losslessly to `i32`.
    pub fn is_i32(&self) -> bool {
        self.is_convertible::<i32>()
    }

    /// True iff the scalar text converts losslessly to `i64`.
    pub fn is_i64(&self) -> bool {
        self.is_convertible::<i64>()
    }

    /// True iff the scalar text converts losslessly to `u32`.
    pub fn is_u32(&self) -> bool {
        self.is_convertible::<u32>()
    }

    /// True iff the scalar text converts losslessly to `u64`.
    pub fn is_u64(&self) -> bool {
        self.is_convertible::<u64>()
    }

    /// True iff the scalar text converts losslessly to `f64`.
    pub fn is_f64(&self) -> bool {
        self.is_convertible::<f64>()
    }

    fn is_convertible<T: FromScalar>(&self) -> bool {
        self.node()
            .and_then(|node| node.scalar_text())
            .map_or(false, |text| T::from_scalar(text).is_some())
    }

    /// Extracts the scalar as `T`.
    ///
    /// Fails with [`DocError::MemberMissing`] on a missing receiver and with
    /// [`DocError::TypeMismatch`] when the receiver is not a scalar or its
    /// text does not convert. The conversion is the same one backing the
    /// `is_*` predicates, so `is_i32() == true` guarantees `parse::<i32>()`
    /// succeeds and vice versa.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use doctree::domain::{Node, Value};
    ///
    /// # fn main() -> doctree::domain::Result<()> {
    /// let doc = Value::from_root(Arc::new(Node::Mapping(vec![(
    ///     "port".to_string(),
    ///     Arc::new(Node::Scalar("26379".to_string())),
    /// )])));
    ///
    /// let port: i32 = doc.at("port")?.parse()?;
    /// assert_eq!(port, 26379);
    ///
    /// let err = doc.at("host")?.parse::<String>().unwrap_err();
    /// assert_eq!(err.to_string(), "field 'host' is missing");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse<T: FromScalar>(&self) -> Result<T> {
        let node = self.check_not_missing()?;
        node.scalar_text()
            .and_then(T::from_scalar)
            .ok_or_else(|| self.type_mismatch(T::TYPE_NAME))
    }

    /// Extracts the scalar as a `bool`.
    pub fn as_bool(&self) -> Result<bool> {
        self.parse()
    }

    /// Extracts the scalar as an `i32`.
    pub fn as_i32(&self) -> Result<i32> {
        self.parse()
    }

    /// Extracts the scalar as an `i64`.
    pub fn as_i64(&self) -> Result<i64> {
        self.parse()
    }

    /// Extracts the scalar as a `u32`.
    pub fn as_u32(&self) -> Result<u32> {
        self.parse()
    }

    /// Extracts the scalar as a `u64`.
    pub fn as_u64(&self) -> Result<u64> {
        self.parse()
    }

    /// Extracts the scalar as an `f64`.
    pub fn as_f64(&self) -> Result<f64> {
        self.parse()
    }

    /// Extracts the scalar text as an owned `String`.
    pub fn as_string(&self) -> Result<String> {
        self.parse()
    }

    /// Deeply copies the subtree rooted at this value.
    ///
    /// The copy keeps the diagnostic path and root flag of its origin (it
    /// represents "this value, detached") but shares no storage with the
    /// source document.
    #[must_use]
    pub fn deep_clone(&self) -> Value {
        Value {
            handle: match &self.handle {
                Handle::Missing => Handle::Missing,
                Handle::Present(node) => Handle::Present(node.deep_clone()),
            },
            path: self.path.clone(),
            is_root: self.is_root,
        }
    }

    /// True iff both values are present and reference the same underlying
    /// node storage. Intended for tests and debugging of the sharing rules.
    pub fn shares_storage_with(&self, other: &Value) -> bool {
        match (self.node(), other.node()) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn check_not_missing(&self) -> Result<&Arc<Node>> {
        self.node().ok_or_else(|| DocError::MemberMissing {
            path: self.path(),
        })
    }

    fn type_mismatch(&self, expected: &'static str) -> DocError {
        DocError::TypeMismatch {
            expected,
            actual: self.kind(),
            path: self.path(),
        }
    }
}

/// Structural equality: kinds and contents compared recursively. Two missing
/// values are equal; a missing value never equals a present null. Paths and
/// root flags do not participate.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self.node(), other.node()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(text: &str) -> Arc<Node> {
        Arc::new(Node::Scalar(text.to_string()))
    }

    fn mapping(entries: Vec<(&str, Arc<Node>)>) -> Arc<Node> {
        Arc::new(Node::Mapping(
            entries
                .into_iter()
                .map(|(key, node)| (key.to_string(), node))
                .collect(),
        ))
    }

    fn sequence(items: Vec<Arc<Node>>) -> Arc<Node> {
        Arc::new(Node::Sequence(items))
    }

    fn sample_doc() -> Value {
        Value::from_root(mapping(vec![
            (
                "shards",
                sequence(vec![mapping(vec![("name", scalar("s1"))])]),
            ),
            (
                "sentinels",
                sequence(vec![mapping(vec![
                    ("host", scalar("h1")),
                    ("port", scalar("26379")),
                ])]),
            ),
            ("empty", Arc::new(Node::Null)),
        ]))
    }

    #[test]
    fn test_root_flag() {
        let doc = sample_doc();
        assert!(doc.is_root());
        assert!(!doc.at("shards").unwrap().is_root());
        assert!(!doc.deep_clone().at("shards").unwrap().is_root());
        assert!(doc.deep_clone().is_root());
    }

    #[test]
    fn test_at_present_key() {
        let doc = sample_doc();
        let shards = doc.at("shards").unwrap();
        assert!(shards.is_sequence());
        assert_eq!(shards.path(), "shards");
    }

    #[test]
    fn test_at_absent_key_is_missing_not_error() {
        let doc = sample_doc();
        let missing = doc.at("missing_key").unwrap();
        assert!(missing.is_missing());
        assert!(!missing.is_null());
        assert_eq!(missing.kind(), Kind::Missing);
        assert_eq!(missing.path(), "missing_key");
    }

    #[test]
    fn test_at_through_missing_ancestor_extends_path() {
        let doc = sample_doc();
        let deep = doc
            .at("missing_key")
            .unwrap()
            .at("a")
            .unwrap()
            .at_index(3)
            .unwrap()
            .at("b")
            .unwrap();
        assert!(deep.is_missing());
        assert_eq!(deep.path(), "missing_key.a[3].b");
    }

    #[test]
    fn test_at_on_null_behaves_as_missing_child() {
        let doc = sample_doc();
        let child = doc.at("empty").unwrap().at("inner").unwrap();
        assert!(child.is_missing());
        assert_eq!(child.path(), "empty.inner");
    }

    #[test]
    fn test_at_on_scalar_is_type_mismatch() {
        let doc = sample_doc();
        let name = doc
            .at("shards")
            .unwrap()
            .at_index(0)
            .unwrap()
            .at("name")
            .unwrap();
        let err = name.at("deeper").unwrap_err();
        match err {
            DocError::TypeMismatch {
                expected,
                actual,
                path,
            } => {
                assert_eq!(expected, "mapping");
                assert_eq!(actual, Kind::Scalar);
                assert_eq!(path, "shards[0].name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_at_index_in_range() {
        let doc = sample_doc();
        let shard = doc.at("shards").unwrap().at_index(0).unwrap();
        assert!(shard.is_mapping());
        assert_eq!(shard.path(), "shards[0]");
    }

    #[test]
    fn test_at_index_out_of_bounds() {
        let doc = sample_doc();
        let err = doc.at("shards").unwrap().at_index(5).unwrap_err();
        match err {
            DocError::OutOfBounds { index, size, path } => {
                assert_eq!(index, 5);
                assert_eq!(size, 1);
                assert_eq!(path, "shards");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_at_index_on_null_is_out_of_bounds_with_size_zero() {
        let doc = sample_doc();
        let err = doc.at("empty").unwrap().at_index(0).unwrap_err();
        match err {
            DocError::OutOfBounds { index, size, .. } => {
                assert_eq!(index, 0);
                assert_eq!(size, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_at_index_on_missing_defers() {
        let doc = sample_doc();
        let item = doc.at("missing_key").unwrap().at_index(7).unwrap();
        assert!(item.is_missing());
        assert_eq!(item.path(), "missing_key[7]");
    }

    #[test]
    fn test_at_index_on_mapping_is_type_mismatch() {
        let doc = sample_doc();
        let err = doc.at_index(0).unwrap_err();
        assert!(matches!(
            err,
            DocError::TypeMismatch {
                expected: "sequence",
                ..
            }
        ));
    }

    #[test]
    fn test_size() {
        let doc = sample_doc();
        assert_eq!(doc.size().unwrap(), 3);
        assert_eq!(doc.at("shards").unwrap().size().unwrap(), 1);
        assert_eq!(doc.at("empty").unwrap().size().unwrap(), 0);
    }

    #[test]
    fn test_size_on_missing_is_member_missing() {
        let doc = sample_doc();
        let err = doc.at("missing_key").unwrap().size().unwrap_err();
        assert!(matches!(err, DocError::MemberMissing { .. }));
    }

    #[test]
    fn test_size_on_scalar_is_type_mismatch() {
        let doc = sample_doc();
        let host = doc
            .at("sentinels")
            .unwrap()
            .at_index(0)
            .unwrap()
            .at("host")
            .unwrap();
        assert!(matches!(
            host.size().unwrap_err(),
            DocError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_has_member() {
        let doc = sample_doc();
        assert!(doc.has_member("shards"));
        assert!(!doc.has_member("absent"));
        // Defensive lookups report false rather than failing.
        assert!(!doc.at("missing_key").unwrap().has_member("x"));
        assert!(!doc.at("empty").unwrap().has_member("x"));
        assert!(!doc.at("shards").unwrap().has_member("x"));
    }

    #[test]
    fn test_predicates_and_extraction_agree() {
        let doc = sample_doc();
        let port = doc
            .at("sentinels")
            .unwrap()
            .at_index(0)
            .unwrap()
            .at("port")
            .unwrap();
        assert!(port.is_i32() && port.as_i32().is_ok());
        assert!(port.is_i64() && port.as_i64().is_ok());
        assert!(port.is_u32() && port.as_u32().is_ok());
        assert!(port.is_u64() && port.as_u64().is_ok());
        assert!(port.is_f64() && port.as_f64().is_ok());
        assert!(port.is_string() && port.as_string().is_ok());
        assert!(!port.is_bool() && port.as_bool().is_err());
        assert_eq!(port.as_i32().unwrap(), 26379);
    }

    #[test]
    fn test_missing_is_convertible_to_nothing() {
        let doc = sample_doc();
        let missing = doc.at("missing_key").unwrap();
        assert!(!missing.is_bool());
        assert!(!missing.is_i32());
        assert!(!missing.is_i64());
        assert!(!missing.is_u32());
        assert!(!missing.is_u64());
        assert!(!missing.is_f64());
        assert!(!missing.is_string());
        assert!(!missing.is_sequence());
        assert!(!missing.is_mapping());
        assert!(!missing.is_null());
    }

    #[test]
    fn test_null_is_convertible_to_nothing() {
        let doc = sample_doc();
        let null = doc.at("empty").unwrap();
        assert!(null.is_null());
        assert!(!null.is_missing());
        assert!(!null.is_string());
        assert!(!null.is_bool());
        assert!(matches!(
            null.as_string().unwrap_err(),
            DocError::TypeMismatch {
                expected: "string",
                actual: Kind::Null,
                ..
            }
        ));
    }

    #[test]
    fn test_extraction_on_missing_is_member_missing_with_path() {
        let doc = sample_doc();
        let value = doc
            .at("sentinels")
            .unwrap()
            .at_index(0)
            .unwrap()
            .at("weight")
            .unwrap();
        assert!(value.is_missing());
        let err = value.as_string().unwrap_err();
        match err {
            DocError::MemberMissing { path } => assert_eq!(path, "sentinels[0].weight"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extraction_type_mismatch_reports_natural_kind() {
        let doc = sample_doc();
        let err = doc.at("shards").unwrap().as_i32().unwrap_err();
        match err {
            DocError::TypeMismatch {
                expected,
                actual,
                path,
            } => {
                assert_eq!(expected, "i32");
                assert_eq!(actual, Kind::Sequence);
                assert_eq!(path, "shards");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cheap_clone_shares_storage() {
        let doc = sample_doc();
        let copy = doc.clone();
        assert!(doc.shares_storage_with(&copy));
        assert_eq!(doc, copy);
    }

    #[test]
    fn test_deep_clone_is_equal_but_independent() {
        let doc = sample_doc();
        let shards = doc.at("shards").unwrap();
        let detached = shards.deep_clone();
        assert_eq!(shards, detached);
        assert_eq!(detached.path(), "shards");
        assert!(!shards.shares_storage_with(&detached));
        assert!(!shards
            .at_index(0)
            .unwrap()
            .shares_storage_with(&detached.at_index(0).unwrap()));
    }

    #[test]
    fn test_structural_equality_of_values() {
        let doc = sample_doc();
        let other = sample_doc();
        assert_eq!(doc, other);
        assert_ne!(doc.at("shards").unwrap(), doc.at("sentinels").unwrap());

        let missing_a = doc.at("nope").unwrap();
        let missing_b = other.at("also_nope").unwrap();
        assert_eq!(missing_a, missing_b);
        assert_ne!(missing_a, doc.at("empty").unwrap());
    }

    #[test]
    fn test_missing_sentinel_never_equals_present_null() {
        let doc = sample_doc();
        assert_ne!(doc.at("missing_key").unwrap(), doc.at("empty").unwrap());
    }
}
