// SPDX-License-Identifier: MIT OR Apache-2.0

//! A type-checked accessor layer over parsed YAML/JSON documents.
//!
//! This crate lets application code navigate an already-parsed, tree-structured
//! document (scalars, sequences, key-ordered mappings) with deferred type and
//! existence checking. Every failed check reports a precise, human-readable
//! path from the document root, such as `redis_settings.client1.shards[2]`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`Value`, `Node`, `Path`, errors)
//! - **Ports**: Trait definitions that define interfaces (`DocumentParser`)
//! - **Adapters**: Parser implementations for specific formats (YAML, JSON)
//! - **Service**: Typed settings loaders built on top of the accessor contract
//!
//! # Key Properties
//!
//! - **Three-way distinction**: "key absent" (missing), "value is null", and
//!   "value has wrong type" are separate, observable states.
//! - **Deferred validation**: subscripting through absent data never fails;
//!   errors surface only at typed extraction or structural-kind checks.
//! - **Path accumulation**: every subscript and iteration step extends the
//!   diagnostic path, so errors locate themselves without extra context.
//! - **Shared storage**: values are cheap `Arc`-backed handles into the parsed
//!   document; [`Value::deep_clone`](domain::Value::deep_clone) is the only
//!   operation producing storage-independent data.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser adapter (default)
//! - `json`: Enable the JSON parser adapter (default)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "yaml")]
//! # fn main() -> doctree::domain::Result<()> {
//! use doctree::prelude::*;
//!
//! let parser = YamlParser::new();
//! let doc = parser.parse("shards:\n  - name: s1\n  - name: s2\n")?;
//!
//! let name = doc.at("shards")?.at_index(0)?.at("name")?.as_string()?;
//! assert_eq!(name, "s1");
//!
//! // Absent keys defer: navigation succeeds, extraction reports the full path.
//! let absent = doc.at("shards")?.at_index(1)?.at("weight")?;
//! assert!(absent.is_missing());
//! assert_eq!(absent.path(), "shards[1].weight");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "yaml"))]
//! # fn main() {}
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{DocError, FromScalar, Kind, Node, Path, Result, Value};
    pub use crate::ports::DocumentParser;
    pub use crate::service::{HostPort, RedisSettings, RedisSettingsMap, SettingsError};

    // Re-export adapters based on feature flags
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
