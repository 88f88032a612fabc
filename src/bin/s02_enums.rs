//! Section 2: Enums
//!
//! Run with: cargo run --bin s02_enums

use syntax_showcase::model::{Color, Role};

// Explicit discriminants, for the numeric flavor
#[derive(Debug, Clone, Copy, PartialEq)]
enum StatusCode {
    Ok = 200,
    NotFound = 404,
    ServerError = 500,
}

impl StatusCode {
    fn reason(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::ServerError => "Internal Server Error",
        }
    }
}

fn main() {
    println!("=== String-valued enum ===");
    for color in Color::ALL {
        println!("{:?} -> {}", color, color.as_str());
    }
    assert_eq!(Color::Green.to_string(), "GREEN");

    println!("\n=== Parsing into an enum ===");
    for raw in ["admin", "user", "guest", "root"] {
        match raw.parse::<Role>() {
            Ok(role) => println!("'{}' parsed as {:?}", raw, role),
            Err(e) => println!("'{}' rejected: {}", raw, e),
        }
    }

    println!("\n=== Numeric discriminants ===");
    let codes = [StatusCode::Ok, StatusCode::NotFound, StatusCode::ServerError];
    for code in codes {
        println!("{} {}", code as u16, code.reason());
    }
    assert_eq!(StatusCode::NotFound as u16, 404);
}
