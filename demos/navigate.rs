// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic navigation example for the document accessor crate.
//!
//! This example demonstrates:
//! - Parsing a YAML document into a navigable value
//! - Subscripting by key and index with deferred existence checks
//! - Typed extraction with path-qualified errors
//! - Loading typed Redis settings through the accessor contract
//!
//! To run this example:
//! ```bash
//! cargo run --example navigate
//! ```

use doctree::prelude::*;

const SETTINGS: &str = r#"
redis_settings:
  client1:
    password: secret
    shards:
      - name: shard0
      - name: shard1
    sentinels:
      - host: sentinel-a
        port: 26380
      - host: sentinel-b
"#;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== doctree: Basic Navigation ===\n");

    let doc = YamlParser::new().parse(SETTINGS)?;

    // Example 1: navigate and extract with full type checking
    println!("--- Example 1: Typed Extraction ---");
    let port = doc
        .at("redis_settings")?
        .at("client1")?
        .at("sentinels")?
        .at_index(0)?
        .at("port")?
        .as_i32()?;
    println!("first sentinel port: {}", port);

    // Example 2: navigation through absent data is deferred
    println!("\n--- Example 2: Deferred Missing Values ---");
    let absent = doc.at("redis_settings")?.at("client9")?.at("password")?;
    println!("client9 present: {}", !absent.is_missing());
    match absent.as_string() {
        Ok(_) => unreachable!("client9 is not in the document"),
        Err(err) => println!("extraction error carries the path: {}", err),
    }

    // Example 3: iteration with extended paths
    println!("\n--- Example 3: Iteration ---");
    let shards = doc.at("redis_settings")?.at("client1")?.at("shards")?;
    for shard in shards.try_iter()? {
        println!("{} -> {}", shard.path(), shard.at("name")?.as_string()?);
    }

    // Example 4: the typed settings loader built on this contract
    println!("\n--- Example 4: Redis Settings Loader ---");
    match RedisSettingsMap::from_doc(&doc) {
        Ok(settings) => {
            let client = settings.get("client1").expect("client1 is defined");
            println!(
                "client1: {} shard(s), {} sentinel(s), default-port sentinel: {}",
                client.shards.len(),
                client.sentinels.len(),
                client.sentinels[1].port,
            );
        }
        Err(err) => println!("settings rejected: {}", err),
    }

    Ok(())
}
