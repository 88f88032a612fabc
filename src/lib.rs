//! Syntax highlighting test fixtures.
//!
//! This crate contains various Rust constructs to test editor themes. The
//! shared sample entities live here; each numbered binary under `src/bin/`
//! puts one group of constructs on screen.
//!
//! Run any section with: cargo run --bin s01_literals (etc.)

pub mod animals;
pub mod config;
pub mod errors;
pub mod model;
pub mod patterns;
pub mod utils;

/// Version of the fixture set.
pub const VERSION: &str = "1.0.0";

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_is_semver_shaped() {
        let parts: Vec<&str> = super::VERSION.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.parse::<u32>().is_ok()));
    }
}
