// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which provides an interface
//! for turning raw document text in some format (YAML, JSON, etc.) into a
//! navigable root [`Value`].

use crate::domain::{Result, Value};

/// A trait for parsing raw document text into a navigable value graph.
///
/// Implementations lower their format's own value representation into the
/// crate's [`Node`](crate::domain::Node) graph and attach a root
/// [`Value`] to it. The accessor layer itself never parses text; it only
/// consumes what a parser produced, which keeps format concerns behind this
/// boundary.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use doctree::domain::{Node, Result, Value};
/// use doctree::ports::DocumentParser;
///
/// struct LineParser;
///
/// impl DocumentParser for LineParser {
///     fn parse(&self, content: &str) -> Result<Value> {
///         let items = content
///             .lines()
///             .map(|line| Arc::new(Node::Scalar(line.to_string())))
///             .collect();
///         Ok(Value::from_root(Arc::new(Node::Sequence(items))))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["lines"]
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let doc = LineParser.parse("a\nb")?;
/// assert_eq!(doc.at_index(1)?.as_string()?, "b");
/// # Ok(())
/// # }
/// ```
pub trait DocumentParser {
    /// Parses document content into a root-attached [`Value`].
    ///
    /// # Arguments
    ///
    /// * `content` - The raw text of the document
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - A root value over the freshly built node graph
    /// * `Err(DocError)` - The content is not valid in this parser's format
    fn parse(&self, content: &str) -> Result<Value>;

    /// Returns the file extensions supported by this parser.
    ///
    /// This allows callers to select a parser based on a file extension.
    /// Extensions are listed without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}
