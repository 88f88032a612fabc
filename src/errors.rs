//! Error types shared by the sample entities.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShowcaseError {
    #[error("Age cannot be negative (got {age})")]
    NegativeAge { age: i32 },

    #[error("Unknown role: '{input}'")]
    UnknownRole { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ShowcaseError::NegativeAge { age: -3 };
        assert_eq!(err.to_string(), "Age cannot be negative (got -3)");

        let err = ShowcaseError::UnknownRole {
            input: "root".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown role: 'root'");
    }
}
