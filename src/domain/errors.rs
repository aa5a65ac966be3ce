// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the document accessor crate.
//!
//! This module defines the error taxonomy for navigation and extraction
//! failures. All errors use `thiserror` and carry the rendered path of the
//! offending value, which is sufficient to locate the failure without any
//! other context.

use crate::domain::node::Kind;
use thiserror::Error;

/// The main error type for document accessor operations.
///
/// This enum represents all possible failures when navigating or extracting
/// values from a parsed document. It is marked as `#[non_exhaustive]` to allow
/// for future additions without breaking backwards compatibility.
///
/// Navigation through absent data never produces an error; only terminal
/// extraction and structural-kind checks do. All failures are recoverable by
/// the caller.
///
/// # Examples
///
/// ```
/// use doctree::domain::errors::DocError;
///
/// fn required_field() -> Result<String, DocError> {
///     Err(DocError::MemberMissing {
///         path: "sentinels[0].host".to_string(),
///     })
/// }
///
/// let err = required_field().unwrap_err();
/// assert_eq!(err.to_string(), "field 'sentinels[0].host' is missing");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocError {
    /// Extraction or an explicit "must exist" check hit a missing value.
    #[error("field '{path}' is missing")]
    MemberMissing {
        /// Rendered path of the missing value
        path: String,
    },

    /// A structural or conversion check failed.
    #[error("field '{path}' is of a wrong type: expected {expected}, actual {actual}")]
    TypeMismatch {
        /// What the operation required (a structural kind or a target type name)
        expected: &'static str,
        /// The natural kind of the offending node
        actual: Kind,
        /// Rendered path of the offending value
        path: String,
    },

    /// A sequence index was present but beyond the sequence's current size.
    #[error("index {index} is out of bounds (size {size}) at field '{path}'")]
    OutOfBounds {
        /// The requested index
        index: usize,
        /// The actual size of the sequence
        size: usize,
        /// Rendered path of the sequence being indexed
        path: String,
    },

    /// Failed to parse raw document text into a node graph.
    #[error("failed to parse document: {message}")]
    Parse {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for document accessor operations.
pub type Result<T> = std::result::Result<T, DocError>;
