//! Timer example
//!
//! Demonstrates start/save pairs, `measure`, and saving a timer that was
//! never started.
//!
//! Run with: cargo run --example timers

use logsfori::prelude::*;
use logsfori::transports::MemoryTransport;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== logsfori - Timer Example ===\n");

    let transport = MemoryTransport::new();
    let emitter = Emitter::builder().transport(transport.clone()).build();
    emitter.authenticate("demo-token");

    emitter.start_timer("load_profile");
    thread::sleep(Duration::from_millis(25));
    if let Some(report) = emitter.save_timer("load_profile")? {
        println!("load_profile took {} ms", report.execution_time);
    }

    let total = emitter.measure("sum", || (1..=1_000_000u64).sum::<u64>())?;
    println!("sum = {}", total);

    match emitter.save_timer("never_started")? {
        Some(_) => println!("unexpected report"),
        None => println!("never_started: no running timer, nothing sent"),
    }

    println!("\n{} timer reports captured", transport.requests_to("/timer").len());

    Ok(())
}
