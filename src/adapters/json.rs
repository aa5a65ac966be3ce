// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document parser adapter.
//!
//! This module provides an adapter that parses JSON text into the crate's
//! node graph via `serde_json`.

use crate::domain::{DocError, Node, Result, Value};
use crate::ports::DocumentParser;
use std::path::Path;
use std::sync::Arc;

/// JSON parser implementation.
///
/// Lowers `serde_json`'s value tree into the crate's node graph: numbers and
/// booleans keep their display text as the scalar representation, and object
/// key order is preserved as written.
///
/// # Examples
///
/// ```rust
/// use doctree::adapters::JsonParser;
/// use doctree::ports::DocumentParser;
///
/// # fn main() -> doctree::domain::Result<()> {
/// let parser = JsonParser::new();
/// let doc = parser.parse(r#"{"shards":[{"name":"s1"}]}"#)?;
/// assert_eq!(doc.at("shards")?.at_index(0)?.at("name")?.as_string()?, "s1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }

    /// Parses a JSON file from disk.
    ///
    /// The path is canonicalized and the file size is bounded before reading.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Value> {
        let content = crate::adapters::read_document_file(path.as_ref())?;
        self.parse(&content)
    }

    /// Lowers a `serde_json` value into the node graph.
    fn lower(value: &serde_json::Value) -> Arc<Node> {
        match value {
            serde_json::Value::Null => Arc::new(Node::Null),
            serde_json::Value::Bool(b) => Arc::new(Node::Scalar(b.to_string())),
            serde_json::Value::Number(n) => Arc::new(Node::Scalar(n.to_string())),
            serde_json::Value::String(s) => Arc::new(Node::Scalar(s.clone())),
            serde_json::Value::Array(items) => {
                Arc::new(Node::Sequence(items.iter().map(Self::lower).collect()))
            }
            serde_json::Value::Object(map) => Arc::new(Node::Mapping(
                map.iter()
                    .map(|(key, child)| (key.clone(), Self::lower(child)))
                    .collect(),
            )),
        }
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<Value> {
        let raw: serde_json::Value =
            serde_json::from_str(content).map_err(|e| DocError::Parse {
                message: format!("invalid JSON document: {}", e),
                source: Some(Box::new(e)),
            })?;
        Ok(Value::from_root(Self::lower(&raw)))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Kind;

    #[test]
    fn test_parse_object() {
        let doc = JsonParser::new()
            .parse(r#"{"host": "h1", "port": 26379}"#)
            .unwrap();
        assert!(doc.is_root());
        assert_eq!(doc.at("host").unwrap().as_string().unwrap(), "h1");
        assert_eq!(doc.at("port").unwrap().as_i32().unwrap(), 26379);
    }

    #[test]
    fn test_parse_preserves_structural_kinds() {
        let doc = JsonParser::new()
            .parse(r#"{"s": "x", "n": 1.5, "b": false, "z": null, "a": [], "o": {}}"#)
            .unwrap();
        assert_eq!(doc.at("s").unwrap().kind(), Kind::Scalar);
        assert_eq!(doc.at("n").unwrap().kind(), Kind::Scalar);
        assert_eq!(doc.at("b").unwrap().kind(), Kind::Scalar);
        assert_eq!(doc.at("z").unwrap().kind(), Kind::Null);
        assert_eq!(doc.at("a").unwrap().kind(), Kind::Sequence);
        assert_eq!(doc.at("o").unwrap().kind(), Kind::Mapping);
    }

    #[test]
    fn test_float_scalar_converts() {
        let doc = JsonParser::new().parse(r#"{"ratio": 3.14}"#).unwrap();
        let ratio = doc.at("ratio").unwrap();
        assert!(ratio.is_f64());
        assert!(!ratio.is_i32());
        assert_eq!(ratio.as_f64().unwrap(), 3.14);
    }

    #[test]
    fn test_object_key_order_is_preserved() {
        let doc = JsonParser::new()
            .parse(r#"{"zeta": 1, "alpha": 2, "middle": 3}"#)
            .unwrap();
        let keys: Vec<String> = doc.entries().unwrap().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "middle"]);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = JsonParser::new().parse("{broken");
        assert!(matches!(result.unwrap_err(), DocError::Parse { .. }));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_json_and_yaml_lower_to_equal_graphs() {
        use crate::adapters::YamlParser;

        let json_doc = JsonParser::new()
            .parse(r#"{"shards": [{"name": "s1"}], "count": 2}"#)
            .unwrap();
        let yaml_doc = YamlParser::new()
            .parse("shards:\n  - name: s1\ncount: 2\n")
            .unwrap();
        assert_eq!(json_doc, yaml_doc);
    }
}
