//! Sample record types: a user shape, a color enumeration, and a
//! string-or-number identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ShowcaseError;

/// Access level attached to a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Guest => "guest",
        }
    }
}

impl FromStr for Role {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            "guest" => Ok(Role::Guest),
            other => Err(ShowcaseError::UnknownRole {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sample user record. The id is fixed at construction; everything else is
/// plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    pub tags: Vec<String>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, role: Role) -> Self {
        User {
            id,
            name: name.into(),
            email: None,
            role,
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// Identifiers arrive either as numbers or as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(u64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// Color enumeration with explicit wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(Role::Guest.as_str(), "guest");
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_user_serializes_without_empty_email() {
        let user = User::new(1, "Alice", Role::Admin).with_tags(&["staff"]);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("email"));
        assert!(json.contains("\"role\":\"admin\""));
    }

    #[test]
    fn test_user_email_is_optional() {
        let user = User::new(2, "Bob", Role::User).with_email("bob@example.com");
        assert_eq!(user.email.as_deref(), Some("bob@example.com"));
        assert_eq!(user.id(), 2);
    }

    #[test]
    fn test_id_accepts_both_shapes() {
        let ids = [Id::Num(7), Id::Text("abc-123".to_string())];
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "abc-123");
    }

    #[test]
    fn test_color_wire_names() {
        assert_eq!(Color::Red.as_str(), "RED");
        assert_eq!(serde_json::to_string(&Color::Blue).unwrap(), "\"BLUE\"");
        assert_eq!(Color::ALL.len(), 3);
    }
}
