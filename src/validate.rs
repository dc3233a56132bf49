//! Pre-submission Validation
//!
//! Advisory client-side checks mirroring the backend's form constraints.
//! The backend remains the authority; these only save a round trip.

use regex::Regex;
use std::sync::OnceLock;

/// Bounds shared by usernames and group names.
pub const NAME_MIN: usize = 5;
pub const NAME_MAX: usize = 35;

pub const PASSWORD_MIN: usize = 15;

/// Same pattern the backend applies to email form fields.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Length check for usernames and group names ([NAME_MIN, NAME_MAX] chars).
pub fn validate_name(label: &str, value: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len < NAME_MIN {
        Err(format!("{} must be at least {} characters", label, NAME_MIN))
    } else if len > NAME_MAX {
        Err(format!("{} must be at most {} characters", label, NAME_MAX))
    } else {
        Ok(())
    }
}

/// Full names only have a lower bound on the backend.
pub fn validate_full_name(value: &str) -> Result<(), String> {
    if value.chars().count() < NAME_MIN {
        Err(format!("Full Name must be at least {} characters", NAME_MIN))
    } else {
        Ok(())
    }
}

pub fn validate_password(value: &str) -> Result<(), String> {
    if value.chars().count() < PASSWORD_MIN {
        Err(format!("Password must be at least {} characters", PASSWORD_MIN))
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), String> {
    if email_regex().is_match(value) {
        Ok(())
    } else {
        Err("Email must be a valid email address".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert!(validate_name("Username", "abcd").is_err());
        assert!(validate_name("Username", "abcde").is_ok());
        assert!(validate_name("Group name", &"x".repeat(35)).is_ok());
        assert!(validate_name("Group name", &"x".repeat(36)).is_err());
    }

    #[test]
    fn test_name_error_mentions_label() {
        let err = validate_name("Group name", "ab").unwrap_err();
        assert!(err.contains("Group name"));
        assert!(err.contains("at least 5"));
    }

    #[test]
    fn test_password_minimum() {
        assert!(validate_password(&"p".repeat(14)).is_err());
        assert!(validate_password(&"p".repeat(15)).is_ok());
    }

    #[test]
    fn test_email_pattern() {
        assert!(validate_email("roommate@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }
}
