// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: typed settings loaders built on the accessor contract.
//!
//! This module contains consumers of the domain layer's public surface. They
//! translate documents into strongly typed settings objects, letting the
//! accessor's path-qualified errors propagate to the caller.

pub mod redis_settings;

// Re-export commonly used types
pub use redis_settings::{HostPort, RedisSettings, RedisSettingsMap, SettingsError};
