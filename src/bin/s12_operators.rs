//! Section 12: Operators
//!
//! Run with: cargo run --bin s12_operators

use syntax_showcase::config::Config;

fn main() {
    println!("=== Optional chaining with a fallback ===");
    let config = Config::development();
    let host = config
        .db
        .as_ref()
        .map(|db| db.host.as_str())
        .unwrap_or("127.0.0.1");
    println!("db host = {}", host);

    let bare = Config { db: None, ..config.clone() };
    println!("without a db section: {}", bare.db_host());
    assert_eq!(bare.db_host(), "127.0.0.1");

    println!("\n=== Conditionals are expressions ===");
    let is_true = true;
    let answer = if is_true { "Yes" } else { "No" };
    println!("ternary stand-in: {}", answer);

    println!("\n=== Arithmetic ===");
    let (a, b) = (17, 5);
    println!("{} + {} = {}", a, b, a + b);
    println!("{} % {} = {}", a, b, a % b);
    println!("{} / {} = {} (integer division)", a, b, a / b);
    println!("2^10 via pow: {}", 2_i32.pow(10));
    println!("saturating: {}", i32::MAX.saturating_add(1));

    println!("\n=== Bitwise ===");
    let flags = 0b1010;
    println!("{:04b} & 0b0110 = {:04b}", flags, flags & 0b0110);
    println!("{:04b} | 0b0101 = {:04b}", flags, flags | 0b0101);
    println!("{:04b} ^ 0b1111 = {:04b}", flags, flags ^ 0b1111);
    println!("{:04b} << 1 = {:05b}", flags, flags << 1);

    println!("\n=== Comparison and boolean ===");
    println!("3 < 5 && 5 <= 5: {}", 3 < 5 && 5 <= 5);
    println!("1 == 2 || !false: {}", 1 == 2 || !false);

    println!("\n=== Ranges ===");
    let sum: i32 = (1..=100).sum();
    println!("1 + 2 + ... + 100 = {}", sum);
    assert_eq!(sum, 5050);
}
