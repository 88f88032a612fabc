//! Section 11: Async/Await
//!
//! Run with: cargo run --bin s11_async

use std::time::Instant;

use syntax_showcase::animals::{Animal, Dog};
use syntax_showcase::utils;

/// Awaits an already-ready value; no I/O, no suspension.
async fn fetch_data() -> Result<String, String> {
    let result = std::future::ready("data".to_string()).await;
    Ok(result)
}

#[tokio::main]
async fn main() {
    println!("=== Awaiting a ready value ===");
    match fetch_data().await {
        Ok(data) => println!("fetched: {}", data),
        Err(e) => utils::error(&format!("Fetch error: {}", e)),
    }

    println!("\n=== Awaiting a delayed value ===");
    let rex = Dog::new("Rex", 3).expect("valid fixture age");
    let started = Instant::now();
    let prize = rex.fetch().await;
    println!(
        "{} brought back a {} after {:?}",
        rex.name(),
        prize,
        started.elapsed()
    );
    assert_eq!(prize, "stick");

    println!("\n=== join! runs futures concurrently ===");
    let luna = Dog::new("Luna", 2).expect("valid fixture age");
    let started = Instant::now();
    let (a, b, c) = tokio::join!(rex.fetch(), luna.fetch(), fetch_data());
    println!(
        "got {:?}, {:?}, {:?} in {:?} total",
        a,
        b,
        c,
        started.elapsed()
    );
}
