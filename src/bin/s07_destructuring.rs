//! Section 7: Struct Literals and Destructuring
//!
//! Run with: cargo run --bin s07_destructuring

use syntax_showcase::config::{Config, DbConfig};

fn main() {
    let config = Config::development();
    config.start();

    println!("=== Struct destructuring ===");
    let Config { env, port, .. } = &config;
    println!("env = {}, port = {}", env, port);
    assert_eq!(*port, 8080);

    if let Some(DbConfig { host, .. }) = &config.db {
        println!("db host = {}", host);
    }

    println!("\n=== Struct update syntax ===");
    let staging = Config {
        env: "staging".to_string(),
        ..config.clone()
    };
    println!("staging keeps port {} from development", staging.port);

    println!("\n=== Tuples ===");
    let (x, y) = (3, 7);
    let (name, (major, minor)) = ("fixture", (1, 0));
    println!("point ({}, {}), {} v{}.{}", x, y, name, major, minor);

    println!("\n=== Slice patterns ===");
    let [first, rest @ ..] = [1, 2, 3, 4];
    println!("first = {}, rest = {:?}", first, rest);
    assert_eq!(rest, [2, 3, 4]);

    let scores = [90, 72, 88, 61, 95];
    match scores {
        [head, .., tail] => println!("head = {}, tail = {}", head, tail),
    }

    if let [lowest, _, middle, ..] = scores {
        println!("lowest-indexed = {}, third = {}", lowest, middle);
    }
}
