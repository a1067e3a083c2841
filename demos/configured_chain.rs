//! Configured chain example
//!
//! Builds a handler chain from a JSON configuration instead of code.
//!
//! Run with: cargo run --example configured_chain

use monolog::prelude::*;
use monolog::{info, warn};

const CONFIG: &str = r#"{
    "allow_unhandled": false,
    "handlers": [
        { "kind": "console", "tag": "svc", "levels": "info,warn,error", "colors": false },
        { "kind": "console", "tag": "svc-json", "levels": ["error"], "format": "json",
          "timestamp": "rfc3339" },
        { "kind": "crashy", "levels": ["fatal"] }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== Monolog - Configured Chain Example ===\n");

    let config = MonologConfig::from_json(CONFIG)?;
    let logger = config.build()?;

    println!(
        "1. Chain: {}",
        logger.handler_names().collect::<Vec<_>>().join(" -> ")
    );

    println!("\n2. Handled records:");
    info!(logger, "listening on port {}", 8080)?;
    warn!(logger, "cache miss ratio {:.2}", 0.37)?;
    logger.error("upstream timed out")?;

    println!("\n3. Debug is enabled nowhere:");
    if let Err(e) = logger.debug("verbose detail") {
        println!("   {}", e);
    }

    println!("\n4. Fatal crashes the call:");
    if let Err(e) = logger.fatal("out of memory") {
        println!("   {}", e);
    }

    println!("\n5. Effective configuration:");
    println!("{}", config.to_json()?);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
