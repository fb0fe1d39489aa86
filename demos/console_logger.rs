//! Console logger example
//!
//! Demonstrates the facade over the plain console backend, level filtering
//! and metadata, including logging a caught error.
//!
//! Run with: cargo run --example console_logger

use log_facade::prelude::*;
use serde_json::json;

fn parse_port(raw: &str) -> std::result::Result<u16, std::num::ParseIntError> {
    raw.parse()
}

fn main() -> Result<()> {
    println!("=== Log Facade - Console Logger Example ===\n");

    let logger = LogService::get_instance(Some(
        LoggerOptions::new().kind("console").level(LogLevel::Debug),
    ));

    println!("1. Logging at different levels:");
    logger.info("Application started", &[])?;
    logger.debug("Debug information", &[&json!({ "env": "development" })])?;
    logger.warn("This is a warning", &[])?;
    logger.error("An error occurred", &[&json!({ "code": "ERR_001" })])?;

    println!("\n2. Aliases:");
    logger.log("log() is info", &[])?;
    logger.verbose("verbose() is debug", &[])?;
    logger.fatal("fatal() is error", &[])?;

    println!("\n3. Error logging:");
    logger.configure(LoggerOptions::new().kind("console").level("error"));
    logger.info("Hidden at error level", &[])?;
    if let Err(err) = parse_port("80a") {
        logger.error("Caught an error", &[&err.to_string(), &err])?;
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
