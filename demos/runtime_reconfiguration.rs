//! Runtime reconfiguration example
//!
//! Demonstrates swapping the backend and level of the global facade while
//! the application keeps the same handle.
//!
//! Run with: cargo run --example runtime_reconfiguration

use log_facade::prelude::*;
use log_facade::{debug, info};

fn main() -> Result<()> {
    println!("=== Log Facade - Runtime Reconfiguration Example ===\n");

    let logger = LogService::get_instance(Some(
        LoggerOptions::new().kind("console").level("error"),
    ));

    println!("1. Console at error level:");
    logger.info("This will NOT be logged (level is error)", &[])?;
    logger.error("This WILL be logged", &[])?;

    println!("\n2. Reconfigured to debug:");
    logger.configure(LoggerOptions::new().kind("console").level("debug"));
    logger.info("Now this WILL be logged (reconfigured to debug level)", &[])?;
    logger.debug("Debug messages are now visible", &[])?;

    println!("\n3. Same handle, structured backend:");
    logger.configure(LoggerOptions::new().kind(LoggerKind::Structured));
    let request_id = "req-42";
    info!(logger, "Request handled in {}ms", 12; request_id)?;

    println!("\n4. Same handle, formatted backend with pretty output:");
    logger.configure(
        LoggerOptions::new()
            .kind(LoggerKind::Formatted)
            .level(LogLevel::Debug)
            .pretty_print(true),
    );
    debug!(logger, "Query executed"; "SELECT * FROM users", 45)?;

    println!("\n   Active backend: {}", logger.backend_name());
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
