//! Username Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum username length
const USERNAME_MAX_LENGTH: usize = 30;

/// Username value object
///
/// Must be non-empty after trimming; control characters are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new username with validation
    pub fn new(username: impl Into<String>) -> AppResult<Self> {
        let username = username.into().trim().to_string();

        if username.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        if username.chars().count() > USERNAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LENGTH
            )));
        }

        if username.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request(
                "Username contains invalid characters",
            ));
        }

        Ok(Self(username))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        assert!(Username::new("alice").is_ok());
        assert!(Username::new("  bob  ").is_ok()); // trimmed
        assert_eq!(Username::new("  bob  ").unwrap().as_str(), "bob");
    }

    #[test]
    fn test_username_empty() {
        assert!(Username::new("").is_err());
        assert!(Username::new("   ").is_err());
    }

    #[test]
    fn test_username_too_long() {
        assert!(Username::new("x".repeat(USERNAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_username_control_characters() {
        assert!(Username::new("ali\u{0000}ce").is_err());
    }
}
