//! Per-request sessions example
//!
//! Sends to a real collector (LOGSFORI_TOKEN / LOGSFORI_ENDPOINT, default
//! http://127.0.0.1:3000). Each worker thread handles its own "request" with
//! its own session, so timers with the same name never collide. Unreachable
//! collectors are tolerated: failures only show up in the metrics.
//!
//! Run with: LOGSFORI_TOKEN=secret cargo run --example per_request_sessions

use logsfori::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== logsfori - Per-Request Sessions Example ===\n");

    let mut config = Config::from_env()?;
    if !config.is_authenticated() {
        config = Config::new();
        config.authenticate("demo-token");
    }
    println!("Sending to {}", config.endpoint());

    let root = Arc::new(
        Emitter::builder()
            .config(config)
            .timeout(Duration::from_secs(2))
            .build(),
    );

    let handles: Vec<_> = (0..3)
        .map(|i| {
            let request = root.for_session(Arc::new(MemorySession::with_id(format!("req-{}", i))));
            thread::spawn(move || -> Result<()> {
                request.start_timer("handle_request");
                request
                    .event("request", "started")
                    .field("worker", i)
                    .push()?;
                thread::sleep(Duration::from_millis(10 * (i as u64 + 1)));
                request.save_timer("handle_request")?;
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        if let Ok(Err(e)) = handle.join() {
            eprintln!("worker failed: {}", e);
        }
    }

    let metrics = root.metrics();
    println!("events sent:        {}", metrics.events_sent());
    println!("timers sent:        {}", metrics.timers_sent());
    println!("transport failures: {}", metrics.transport_failures());

    Ok(())
}
