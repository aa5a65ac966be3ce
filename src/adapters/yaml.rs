// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser adapter.
//!
//! This module provides an adapter that parses YAML text into the crate's
//! node graph via `serde_yaml`.

use crate::domain::{DocError, Node, Result, Value};
use crate::ports::DocumentParser;
use std::path::Path;
use std::sync::Arc;

/// YAML parser implementation.
///
/// Lowers `serde_yaml`'s value tree into the crate's node graph: numbers and
/// booleans keep their display text as the scalar representation, tagged
/// values are unwrapped, and mapping key order is preserved as written.
/// Scalar mapping keys that are not strings (numbers, booleans) are
/// stringified; mappings and sequences used as keys are skipped.
///
/// # Examples
///
/// ```rust
/// use doctree::adapters::YamlParser;
/// use doctree::ports::DocumentParser;
///
/// # fn main() -> doctree::domain::Result<()> {
/// let parser = YamlParser::new();
/// let doc = parser.parse("database:\n  host: localhost\n  port: 5432")?;
/// assert_eq!(doc.at("database")?.at("port")?.as_i32()?, 5432);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Parses a YAML file from disk.
    ///
    /// The path is canonicalized and the file size is bounded before reading.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use doctree::adapters::YamlParser;
    ///
    /// # fn main() -> doctree::domain::Result<()> {
    /// let doc = YamlParser::new().parse_file("/etc/myapp/settings.yaml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Value> {
        let content = crate::adapters::read_document_file(path.as_ref())?;
        self.parse(&content)
    }

    /// Lowers a `serde_yaml` value into the node graph.
    fn lower(value: &serde_yaml::Value) -> Arc<Node> {
        match value {
            serde_yaml::Value::Null => Arc::new(Node::Null),
            serde_yaml::Value::Bool(b) => Arc::new(Node::Scalar(b.to_string())),
            serde_yaml::Value::Number(n) => Arc::new(Node::Scalar(n.to_string())),
            serde_yaml::Value::String(s) => Arc::new(Node::Scalar(s.clone())),
            serde_yaml::Value::Sequence(items) => {
                Arc::new(Node::Sequence(items.iter().map(Self::lower).collect()))
            }
            serde_yaml::Value::Mapping(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, child) in map {
                    if let Some(key) = Self::scalar_key(key) {
                        entries.push((key, Self::lower(child)));
                    }
                }
                Arc::new(Node::Mapping(entries))
            }
            serde_yaml::Value::Tagged(tagged) => Self::lower(&tagged.value),
        }
    }

    /// Stringifies a scalar mapping key; `None` for structured keys.
    fn scalar_key(key: &serde_yaml::Value) -> Option<String> {
        match key {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Value> {
        let raw: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| DocError::Parse {
                message: format!("invalid YAML document: {}", e),
                source: Some(Box::new(e)),
            })?;
        Ok(Value::from_root(Self::lower(&raw)))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
