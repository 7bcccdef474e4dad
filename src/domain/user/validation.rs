//! Username and password validation rules

use crate::domain::error::DomainError;

const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 50;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a username
///
/// Rules:
/// - 3 to 50 characters
/// - Only alphanumeric characters, underscores, and hyphens
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.len() < MIN_USERNAME_LENGTH {
        return Err(DomainError::validation(format!(
            "username must be at least {MIN_USERNAME_LENGTH} characters"
        )));
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(DomainError::validation(format!(
            "username cannot exceed {MAX_USERNAME_LENGTH} characters"
        )));
    }

    for c in username.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '-' {
            return Err(DomainError::validation(format!(
                "username contains invalid character '{c}'"
            )));
        }
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - 8 to 128 characters
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(DomainError::validation(format!(
            "password cannot exceed {MAX_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("user_name").is_ok());
        assert!(validate_username("user-name").is_ok());
        assert!(validate_username("User123").is_ok());
    }

    #[test]
    fn test_username_too_short() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_username_too_long() {
        let long_username = "a".repeat(51);
        assert!(validate_username(&long_username).is_err());
    }

    #[test]
    fn test_username_invalid_character() {
        assert!(validate_username("user@name").is_err());
        assert!(validate_username("user name").is_err());
    }

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("P@ssw0rd!").is_ok());
        assert!(validate_password("12345678").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        assert!(validate_password("1234567").is_err());
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(129);
        assert!(validate_password(&long_password).is_err());
    }
}
