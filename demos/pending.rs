//! Promise Settlement Example
//!
//! Spawns work onto the tokio runtime as promises and probes whether each
//! has settled yet, without waiting on it.
//!
//! Run with: cargo run --example pending --features async

use std::time::Duration;

use valcheck::predicate::{is_error, is_pending};
use valcheck::value::{Object, Promise, Value};

#[tokio::main]
async fn main() {
    println!("=== Promise Settlement Example ===\n");

    let fast = Promise::spawn(async { Ok(Value::from("fast")) });
    let slow = Promise::spawn(async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(Value::from("slow"))
    });
    let failing = Promise::spawn(async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Err(Value::from(Object::error("upstream timed out")))
    });

    let tasks = [("fast", fast), ("slow", slow), ("failing", failing)];

    for tick in 0..4 {
        println!("tick {}:", tick);
        for (name, promise) in &tasks {
            let value = Value::from(promise.clone());
            println!("  {:<8} pending={}", name, is_pending(&value).await);
        }
        tokio::time::sleep(Duration::from_millis(80)).await;
    }

    println!();
    for (name, promise) in tasks {
        match promise.settled().await {
            Ok(value) => println!("{} fulfilled with {:?}", name, value),
            Err(reason) => println!("{} rejected, is_error={}", name, is_error(&reason, None)),
        }
    }

    // A promise nobody settles stays pending
    let (orphan, resolver) = Promise::deferred();
    drop(resolver);
    println!(
        "\norphaned deferred promise pending: {}",
        is_pending(&Value::from(orphan)).await
    );
}
