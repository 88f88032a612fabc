//! Compiled regular expressions shared by the fixtures.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anchored email shape, for validating a whole candidate string.
    pub static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").unwrap();

    /// Unanchored variant, for scanning free text.
    pub static ref EMAIL_SCAN_RE: Regex =
        Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}").unwrap();
}

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// All email-shaped substrings of `text`, in order of appearance.
pub fn find_emails(text: &str) -> Vec<&str> {
    EMAIL_SCAN_RE.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("first.last-1@sub.domain.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("trailing@example.com "));
    }

    #[test]
    fn test_scans_free_text() {
        let text = "Contact a@example.com or b@example.org today";
        assert_eq!(find_emails(text), vec!["a@example.com", "b@example.org"]);
        assert!(find_emails("nothing here").is_empty());
    }
}
