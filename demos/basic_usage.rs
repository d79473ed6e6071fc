//! Basic client usage example
//!
//! Demonstrates authentication, the severity gate and structured extra fields.
//! Events are printed instead of sent so no collector is needed.
//!
//! Run with: cargo run --example basic_usage

use logsfori::prelude::*;
use logsfori::transports::MemoryTransport;

fn main() -> Result<()> {
    println!("=== logsfori - Basic Usage Example ===\n");

    let transport = MemoryTransport::new();
    let emitter = Emitter::builder().transport(transport.clone()).build();

    // Emitting before authenticate is a usage error
    println!("1. Before authenticate:");
    match emitter.info("startup", "too early") {
        Err(e) => println!("   rejected: {}", e),
        Ok(outcome) => println!("   unexpected: {:?}", outcome),
    }

    emitter.authenticate("demo-token");

    println!("\n2. Default minimum severity is {}:", emitter.minimum_severity());
    println!("   debug   -> {:?}", emitter.debug("cache", "miss")?);
    println!("   info    -> {:?}", emitter.info("startup", "service ready")?);

    emitter.set_minimum_severity("warning")?;
    println!("\n3. Minimum severity set to {}:", emitter.minimum_severity());
    println!("   info    -> {:?}", emitter.info("startup", "hidden")?);
    println!("   error   -> {:?}", emitter.error("db", "connection lost")?);

    println!("\n4. Unknown severity:");
    if let Err(e) = emitter.push_event("e", "m", "LOUD") {
        println!("   rejected: {}", e);
    }

    println!("\n5. Structured event:");
    emitter
        .event("checkout", "order placed")
        .level(Severity::Critical)
        .field("order_id", 1234)
        .field("amount", 99.5)
        .push()?;

    println!("\nRequests captured:");
    for request in transport.requests() {
        println!("   POST {} {}", request.url, String::from_utf8_lossy(&request.body));
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
