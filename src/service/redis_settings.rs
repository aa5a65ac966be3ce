// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed Redis client settings loaded from a settings document.
//!
//! This module translates a document of the shape
//!
//! ```yaml
//! redis_settings:
//!   client1:
//!     password: secret
//!     shards:
//!       - name: shard0
//!     sentinels:
//!       - host: localhost
//!         port: 26379
//! ```
//!
//! into [`RedisSettingsMap`]. It consumes only the accessor's public surface:
//! key/index subscripts, iteration, predicates, and typed extraction. Missing
//! or ill-typed data surfaces as a [`DocError`] carrying the exact document
//! path; domain-specific validation (duplicate clients, empty hosts, port
//! range) is layered on top.

use crate::domain::{DocError, Value};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Sentinel port assumed when a sentinel entry omits `port`.
const DEFAULT_SENTINEL_PORT: i32 = 26379;

/// Errors raised while loading or looking up Redis client settings.
///
/// Accessor-level failures (missing fields, wrong types, bad indices) pass
/// through as [`DocError`]s with their path-qualified messages; the remaining
/// variants cover validation this loader performs on top of the accessor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// A client name was requested that the document does not define.
    #[error("redis client '{name}' not found in settings document")]
    UnknownClient {
        /// The requested client name
        name: String,
    },

    /// The same client name appeared more than once in the document.
    #[error("duplicate redis client name '{name}'")]
    DuplicateClient {
        /// The duplicated client name
        name: String,
    },

    /// A sentinel entry carried an empty host.
    #[error("empty redis sentinel host at '{path}'")]
    EmptySentinelHost {
        /// Rendered path of the offending host field
        path: String,
    },

    /// A sentinel port was outside the valid TCP range.
    #[error("invalid redis sentinel port {port} at '{path}'")]
    InvalidSentinelPort {
        /// The out-of-range port value
        port: i32,
        /// Rendered path of the offending port field
        path: String,
    },

    /// An accessor-level failure with a path-qualified message.
    #[error(transparent)]
    Document(#[from] DocError),
}

/// A sentinel address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostPort {
    /// Sentinel host name or address
    pub host: String,
    /// Sentinel TCP port
    pub port: u16,
}

/// Connection settings for a single named Redis client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedisSettings {
    /// Authentication password; may be empty
    pub password: String,
    /// Shard names, in document order
    pub shards: Vec<String>,
    /// Sentinel addresses, in document order
    pub sentinels: Vec<HostPort>,
}

/// All Redis client settings defined by a settings document, keyed by client name.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "yaml")] {
/// use doctree::adapters::YamlParser;
/// use doctree::ports::DocumentParser;
/// use doctree::service::RedisSettingsMap;
///
/// let doc = YamlParser::new()
///     .parse(
///         "redis_settings:\n  cache:\n    password: pw\n    shards:\n      - name: s1\n    sentinels:\n      - host: h1\n",
///     )
///     .unwrap();
/// let settings = RedisSettingsMap::from_doc(&doc).unwrap();
/// assert_eq!(settings.get("cache").unwrap().sentinels[0].port, 26379);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RedisSettingsMap {
    settings: HashMap<String, RedisSettings>,
}

impl RedisSettingsMap {
    /// Loads every client's settings from a settings document.
    ///
    /// The document must carry a `redis_settings` mapping of client names to
    /// client settings. Each client requires a `password` string, a `shards`
    /// sequence of `{name}` mappings, and a `sentinels` sequence of
    /// `{host, port?}` mappings; `port` defaults to 26379 and must lie in
    /// 1..=65535.
    pub fn from_doc(doc: &Value) -> Result<Self, SettingsError> {
        let clients = doc.at("redis_settings")?;
        if !clients.is_mapping() {
            return Err(wrong_kind(&clients, "mapping").into());
        }

        let mut settings = HashMap::new();
        for (client_name, client) in clients.entries()? {
            let parsed = Self::parse_client(&client)?;
            tracing::debug!("added redis client '{}'", client_name);
            if settings.insert(client_name.clone(), parsed).is_some() {
                return Err(SettingsError::DuplicateClient { name: client_name });
            }
        }
        Ok(Self { settings })
    }

    fn parse_client(client: &Value) -> Result<RedisSettings, SettingsError> {
        if !client.is_mapping() {
            return Err(wrong_kind(client, "mapping").into());
        }

        let mut parsed = RedisSettings {
            password: client.at("password")?.as_string()?,
            ..RedisSettings::default()
        };

        let shards = client.at("shards")?;
        if !shards.is_sequence() {
            return Err(wrong_kind(&shards, "sequence").into());
        }
        for shard in shards.try_iter()? {
            if !shard.is_mapping() {
                return Err(wrong_kind(&shard, "mapping").into());
            }
            parsed.shards.push(shard.at("name")?.as_string()?);
        }

        let sentinels = client.at("sentinels")?;
        if !sentinels.is_sequence() {
            return Err(wrong_kind(&sentinels, "sequence").into());
        }
        for sentinel in sentinels.try_iter()? {
            if !sentinel.is_mapping() {
                return Err(wrong_kind(&sentinel, "mapping").into());
            }
            parsed.sentinels.push(Self::parse_sentinel(&sentinel)?);
        }

        Ok(parsed)
    }

    fn parse_sentinel(sentinel: &Value) -> Result<HostPort, SettingsError> {
        let host_value = sentinel.at("host")?;
        let host = host_value.as_string()?;
        if host.is_empty() {
            return Err(SettingsError::EmptySentinelHost {
                path: host_value.path(),
            });
        }

        let port_value = sentinel.at("port")?;
        let port = if port_value.is_missing() {
            DEFAULT_SENTINEL_PORT
        } else {
            port_value.as_i32()?
        };
        if !(1..=65535).contains(&port) {
            return Err(SettingsError::InvalidSentinelPort {
                port,
                path: port_value.path(),
            });
        }

        Ok(HostPort {
            host,
            port: port as u16,
        })
    }

    /// Looks up the settings of a named client.
    pub fn get(&self, client_name: &str) -> Result<&RedisSettings, SettingsError> {
        self.settings
            .get(client_name)
            .ok_or_else(|| SettingsError::UnknownClient {
                name: client_name.to_string(),
            })
    }

    /// Number of clients defined by the document.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// True iff the document defined no clients.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Iterates over the defined client names, in no particular order.
    pub fn client_names(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }
}

fn wrong_kind(value: &Value, expected: &'static str) -> DocError {
    DocError::TypeMismatch {
        expected,
        actual: value.kind(),
        path: value.path(),
    }
}
