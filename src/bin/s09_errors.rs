//! Section 9: Error Handling
//!
//! Run with: cargo run --bin s09_errors

use std::num::ParseIntError;

use thiserror::Error;

use syntax_showcase::utils;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Something went wrong")]
    Broken,

    #[error("not a number")]
    BadNumber(#[from] ParseIntError),
}

/// Runs its message on the way out of scope, success or failure.
struct Cleanup(&'static str);

impl Drop for Cleanup {
    fn drop(&mut self) {
        println!("{}", self.0);
    }
}

fn explode() -> Result<(), DemoError> {
    Err(DemoError::Broken)
}

fn parse_port(raw: &str) -> Result<u16, DemoError> {
    let port = raw.trim().parse::<u16>()?;
    Ok(port)
}

fn main() {
    println!("=== Catch at the call site ===");
    {
        let _guard = Cleanup("Cleanup");
        if let Err(e) = explode() {
            utils::error(&e.to_string());
        }
        // _guard drops here, printing its message after the catch
    }

    println!("\n=== Propagation with ? ===");
    match parse_port(" 8080 ") {
        Ok(port) => println!("parsed port {}", port),
        Err(e) => utils::error(&e.to_string()),
    }

    match parse_port("eighty-eighty") {
        Ok(port) => println!("parsed port {}", port),
        Err(e) => {
            println!("rejected: {}", e);
            if let Some(source) = std::error::Error::source(&e) {
                println!("caused by: {}", source);
            }
        }
    }

    assert!(parse_port("8080").is_ok());
    assert!(parse_port("70000").is_err()); // out of u16 range
}
