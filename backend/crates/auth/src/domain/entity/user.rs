//! User Entity
//!
//! Read model for user accounts. By construction this type carries no
//! password data; the credential pair exists only on the login path.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{Email, UserPassword, Username};

/// User entity (password-free read model)
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,
    /// Display and login name (unique)
    pub username: Username,
    /// Email address (unique, lowercased)
    pub email: Email,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new user
///
/// The password arrives here already hashed; plaintext never reaches
/// the repository.
#[derive(Debug)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: UserPassword,
}

/// User row paired with its credential hash
///
/// Only materialized by `find_credentials_by_email` for login.
#[derive(Debug)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: UserPassword,
}

/// Partial update for a user row
///
/// `password_hash`, when present, was re-hashed by the application layer
/// before reaching the repository.
#[derive(Debug, Default)]
pub struct UserPatch {
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub password_hash: Option<UserPassword>,
}

impl UserPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password_hash.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_emptiness() {
        assert!(UserPatch::default().is_empty());

        let patch = UserPatch {
            username: Some(Username::from_db("alice")),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
