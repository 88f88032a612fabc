//! Section 10: Regular Expressions
//!
//! Run with: cargo run --bin s10_regex

use regex::Regex;

use syntax_showcase::patterns::{find_emails, is_valid_email};

fn main() {
    println!("=== Email validation ===");
    let candidates = [
        "test@example.com",
        "first.last-1@sub.domain.org",
        "not-an-email",
        "missing@tld",
    ];
    for candidate in candidates {
        println!("{:30} -> {}", candidate, is_valid_email(candidate));
    }
    assert!(is_valid_email("test@example.com"));

    println!("\n=== Scanning free text ===");
    let text = "Write to ops@example.com, or escalate to oncall@example.org after hours.";
    let found = find_emails(text);
    println!("found {} addresses: {:?}", found.len(), found);
    assert_eq!(found.len(), 2);

    println!("\n=== Named capture groups ===");
    let date_re = Regex::new(r"(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})")
        .expect("fixture pattern is valid");
    if let Some(caps) = date_re.captures("released 2024-11-05, patched 2025-01-20") {
        println!(
            "year = {}, month = {}, day = {}",
            &caps["year"], &caps["month"], &caps["day"]
        );
    }
    let dates: Vec<&str> = date_re
        .find_iter("released 2024-11-05, patched 2025-01-20")
        .map(|m| m.as_str())
        .collect();
    println!("all dates: {:?}", dates);
}
