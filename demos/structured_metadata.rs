//! Structured metadata example
//!
//! Demonstrates the structured backend with pretty output and rich metadata:
//! JSON objects, plain values and any `Debug` type.
//!
//! Run with: cargo run --example structured_metadata

use log_facade::prelude::*;
use serde_json::json;

#[derive(Debug)]
#[allow(dead_code)]
struct Product {
    id: &'static str,
    name: &'static str,
    price: f64,
}

fn main() -> Result<()> {
    println!("=== Log Facade - Structured Metadata Example ===\n");

    let logger = LogService::get_instance(Some(
        LoggerOptions::new().kind("structured").level("info").pretty_print(true),
    ));

    println!("1. Object metadata:");
    logger.info(
        "User logged in",
        &[&json!({ "userId": "12345", "ip": "192.168.1.1" })],
    )?;
    logger.warn(
        "High memory usage",
        &[&json!({ "usage": "85%", "threshold": "80%" })],
    )?;
    logger.error(
        "Database connection failed",
        &[&json!({ "database": "postgres", "error": "Connection timeout" })],
    )?;

    println!("\n2. Nested metadata:");
    logger.info(
        "User action",
        &[&json!({
            "user": { "id": "usr_123", "name": "John Doe", "email": "john@example.com" },
            "action": "purchase",
            "product": { "id": "prod_456", "name": "Premium Plan", "price": 99.99 },
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })],
    )?;

    println!("\n3. Plain values and Debug types:");
    let product = Product {
        id: "prod_456",
        name: "Premium Plan",
        price: 99.99,
    };
    logger.info("Cart updated", &[&"usr_123", &3_u32, &product])?;

    println!("\n4. Same metadata through the formatted backend:");
    logger.configure(LoggerOptions::new().kind("formatted"));
    logger.info(
        "User logged in",
        &[&json!({ "userId": "12345" }), &"extra", &true],
    )?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
