//! Validation rules for account fields
//!
//! Usernames are at least four alphabetic characters, emails must match a
//! conventional mailbox shape, and passwords are at least eight characters.
//! Each check returns a human-readable message suitable for direct display.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum username length
pub const MIN_USERNAME_LENGTH: usize = 4;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid username regex"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Normalize a user-supplied identifier: trimmed and lowercased
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Validate a (already normalized) username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < MIN_USERNAME_LENGTH {
        return Err(format!(
            "Username must have at least {} characters",
            MIN_USERNAME_LENGTH
        ));
    }
    if !USERNAME_PATTERN.is_match(username) {
        return Err("Only alphabetic characters are allowed".to_string());
    }
    Ok(())
}

/// Validate a (already normalized) email address
pub fn validate_email(email: &str) -> Result<(), String> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

/// Validate a raw password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must have at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("abc").is_err()); // too short
        assert!(validate_username("alice42").is_err()); // digits rejected
        assert!(validate_username("al ice").is_err()); // whitespace rejected
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.org").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
        let message = validate_password("short").unwrap_err();
        assert!(message.contains("at least 8"));
    }
}
