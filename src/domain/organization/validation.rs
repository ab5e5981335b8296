//! Organization name validation and partition name derivation

use thiserror::Error;

/// Errors that can occur during organization validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrganizationValidationError {
    #[error("Organization name cannot be empty")]
    EmptyName,

    #[error("Organization name is too short. Minimum length is {0} characters")]
    NameTooShort(usize),

    #[error("Organization name exceeds maximum length of {0} characters")]
    NameTooLong(usize),
}

const MIN_NAME_LENGTH: usize = 3;
const MAX_NAME_LENGTH: usize = 50;

/// Prefix for tenant partition names, keeps them out of the system namespace
const PARTITION_PREFIX: &str = "org_";

/// Validate an organization name
///
/// Rules:
/// - Cannot be empty
/// - Minimum 3 characters
/// - Maximum 50 characters
pub fn validate_organization_name(name: &str) -> Result<(), OrganizationValidationError> {
    if name.is_empty() {
        return Err(OrganizationValidationError::EmptyName);
    }

    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(OrganizationValidationError::NameTooShort(MIN_NAME_LENGTH));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(OrganizationValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Derive the partition (collection) name for an organization
///
/// Lowercases the name, replaces every character outside `[a-z0-9_]` with an
/// underscore, and prefixes the result with `org_`. The transform is
/// deterministic so the same organization always maps to the same partition.
pub fn sanitize_collection_name(organization_name: &str) -> String {
    let sanitized: String = organization_name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{}{}", PARTITION_PREFIX, sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        assert!(validate_organization_name("acme").is_ok());
        assert!(validate_organization_name("test_corp").is_ok());
        assert!(validate_organization_name("Test Corp!").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            validate_organization_name(""),
            Err(OrganizationValidationError::EmptyName)
        );
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(
            validate_organization_name("ab"),
            Err(OrganizationValidationError::NameTooShort(3))
        );
    }

    #[test]
    fn test_name_too_long() {
        let name = "a".repeat(51);
        assert_eq!(
            validate_organization_name(&name),
            Err(OrganizationValidationError::NameTooLong(50))
        );
    }

    #[test]
    fn test_sanitize_simple() {
        assert_eq!(sanitize_collection_name("test_corp"), "org_test_corp");
    }

    #[test]
    fn test_sanitize_special_characters() {
        // Space and '!' both map to underscores, uppercase is folded
        assert_eq!(sanitize_collection_name("Test Corp!"), "org_test_corp_");
    }

    #[test]
    fn test_sanitize_is_deterministic() {
        assert_eq!(
            sanitize_collection_name("Acme & Sons"),
            sanitize_collection_name("Acme & Sons")
        );
    }

    #[test]
    fn test_sanitize_digits_preserved() {
        assert_eq!(sanitize_collection_name("Corp123"), "org_corp123");
    }
}
