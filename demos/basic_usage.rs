//! Basic logger usage example
//!
//! Demonstrates a handler chain with level gating, console output and the
//! unhandled-record policy.
//!
//! Run with: cargo run --example basic_usage

use monolog::handlers::{AnalyticsHandler, TrackedEvent, TrackedScreen, Tracker};
use monolog::prelude::*;
use std::io;

/// Prints analytics hits instead of sending them anywhere.
struct PrintingTracker;

impl Tracker for PrintingTracker {
    fn send_exception(&self, description: &str, fatal: bool) -> monolog::Result<()> {
        println!("   [analytics] exception fatal={} {}", fatal, description);
        Ok(())
    }

    fn send_screen(&self, name: &str) -> monolog::Result<()> {
        println!("   [analytics] screen {}", name);
        Ok(())
    }

    fn send_event(&self, event: &TrackedEvent) -> monolog::Result<()> {
        println!("   [analytics] {}", event);
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Monolog - Basic Usage Example ===\n");

    let logger = Monolog::builder()
        .handler(ConsoleHandler::new("demo", LevelSet::all()))
        .handler(AnalyticsHandler::new(PrintingTracker))
        .allow_unhandled(false)
        .build()?;

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message")?;
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.fatal("This is a fatal message")?;

    println!("\n2. Logging with a cause:");
    let cause = io::Error::new(io::ErrorKind::Other, "ENOSPC");
    logger.error_with_cause("disk full", &cause)?;

    println!("\n3. Logging screens and events:");
    logger.trace(TrackedScreen::new("Checkout"))?;
    logger.trace(TrackedEvent::new("cart", "add").with_label("sku-42").with_value(1))?;

    println!("\n4. Level sets are not thresholds:");
    let picky = Monolog::builder()
        .handler(ConsoleHandler::new("picky", [LogLevel::Debug, LogLevel::Fatal]))
        .allow_unhandled(false)
        .build()?;
    picky.debug("Debug message (visible)")?;
    match picky.error("Error message (nobody handles it)") {
        Ok(()) => println!("   unexpected: error was handled"),
        Err(e) => println!("   rejected: {}", e),
    }
    picky.fatal("Fatal message (visible)")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
