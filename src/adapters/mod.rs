// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document parser implementations.
//!
//! This module contains concrete implementations of the
//! [`DocumentParser`](crate::ports::DocumentParser) port for specific
//! document formats. Each adapter lowers its format's own value tree into the
//! crate's node graph.

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "json")]
pub use json::JsonParser;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;

/// Maximum allowed size for document files (10MB).
/// This prevents denial of service via extremely large files.
#[cfg(any(feature = "yaml", feature = "json"))]
const MAX_DOCUMENT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a document file with the shared hardening applied: the path is
/// canonicalized and the size is checked against [`MAX_DOCUMENT_FILE_SIZE`]
/// before the content is read.
#[cfg(any(feature = "yaml", feature = "json"))]
pub(crate) fn read_document_file(path: &std::path::Path) -> crate::domain::Result<String> {
    use crate::domain::DocError;
    use std::fs;

    let canonical_path = path.canonicalize()?;

    let metadata = fs::metadata(&canonical_path)?;
    if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
        return Err(DocError::Parse {
            message: format!(
                "document file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_DOCUMENT_FILE_SIZE
            ),
            source: None,
        });
    }

    Ok(fs::read_to_string(&canonical_path)?)
}
