//! Tracing Example
//!
//! Installs a `tracing-subscriber` formatter and triggers the debug events
//! valcheck emits when it rejects inputs.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use futures::executor::block_on;
use tracing::Level;
use valcheck::predicate::{has_flag, is_pending};
use valcheck::value::{Promise, RegExp};
use valcheck::{is_of_kind_name, Value};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .init();

    println!("=== Tracing Example ===\n");

    // Unknown kind names answer false and log why
    let matched = is_of_kind_name(&Value::from(3), "integer");
    tracing::info!(matched, "checked kind name");

    // Invalid flags fail construction and log the offending flag
    match RegExp::new("a+", "gz") {
        Ok(re) => tracing::info!(%re, "built regex"),
        Err(err) => tracing::warn!(%err, "regex rejected"),
    }
    if let Ok(re) = RegExp::new("a+", "g") {
        let sticky = has_flag(&Value::from(re), &Value::from("y"));
        tracing::info!(sticky, "checked flag");
    }

    // Probing a promise emits a trace event with the outcome
    let pending = block_on(is_pending(&Value::from(Promise::pending())));
    tracing::info!(pending, "probed promise");
}
