//! API DTOs (Data Transfer Objects)
//!
//! Wire format uses snake_case field names throughout.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::User;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Login / Logout
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub message: String,
}

// ============================================================================
// User
// ============================================================================

/// User representation in responses
///
/// There is structurally no password field here; repository reads cannot
/// produce one either.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

/// Partial user update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Update result
#[derive(Debug, Clone, Serialize)]
pub struct AffectedResponse {
    pub affected: u64,
}

/// Delete result
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{Email, Username};
    use chrono::Utc;
    use kernel::id::Id;

    #[test]
    fn test_user_response_has_no_password_key() {
        let user = User {
            id: Id::from_i64(1),
            username: Username::from_db("alice"),
            email: Email::from_db("alice@example.com"),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "alice");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
