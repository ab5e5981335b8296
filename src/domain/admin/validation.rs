//! Admin credential validation

use thiserror::Error;

/// Errors that can occur during admin validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdminValidationError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Email is not a valid address")]
    InvalidEmail,

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),
}

const MAX_EMAIL_LENGTH: usize = 254;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate an email address
///
/// A lightweight syntactic check: exactly one '@' with a non-empty local
/// part and a domain containing a dot. Deliverability is not our problem.
pub fn validate_email(email: &str) -> Result<(), AdminValidationError> {
    if email.is_empty() {
        return Err(AdminValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(AdminValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return Err(AdminValidationError::InvalidEmail);
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(AdminValidationError::InvalidEmail);
    }

    if email.chars().any(|c| c.is_whitespace()) {
        return Err(AdminValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 8 characters
/// - Maximum 128 characters
pub fn validate_password(password: &str) -> Result<(), AdminValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AdminValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AdminValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("admin@testcorp.com").is_ok());
        assert!(validate_email("a.b+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(AdminValidationError::EmptyEmail));
        assert_eq!(
            validate_email("no-at-sign"),
            Err(AdminValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("@example.com"),
            Err(AdminValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("user@"),
            Err(AdminValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("user@domain"),
            Err(AdminValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("two@at@signs.com"),
            Err(AdminValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("spaces in@example.com"),
            Err(AdminValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("securepass123").is_ok());
        assert_eq!(
            validate_password("short"),
            Err(AdminValidationError::PasswordTooShort(8))
        );

        let long = "a".repeat(129);
        assert_eq!(
            validate_password(&long),
            Err(AdminValidationError::PasswordTooLong(128))
        );
    }
}
