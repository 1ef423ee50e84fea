//! Update User Use Case
//!
//! Applies a partial update to a user row. When the password changes it
//! is re-validated and re-hashed here, before the patch reaches the
//! repository (the same transform the create path runs).

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::UserPatch;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword, UserPassword, Username};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Update user input (all fields optional)
#[derive(Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Update user use case
pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Returns the affected row count; 0 means no such user.
    pub async fn execute(&self, id: UserId, input: UpdateUserInput) -> AuthResult<u64> {
        let mut patch = UserPatch::default();

        if let Some(username) = input.username {
            patch.username = Some(
                Username::new(username)
                    .map_err(|e| AuthError::Validation(e.message().to_string()))?,
            );
        }

        if let Some(email) = input.email {
            patch.email = Some(
                Email::new(email).map_err(|e| AuthError::Validation(e.message().to_string()))?,
            );
        }

        if let Some(password) = input.password {
            let raw = RawPassword::new(password)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;
            patch.password_hash = Some(
                UserPassword::from_raw(&raw, self.config.pepper())
                    .map_err(|e| AuthError::Internal(e.message().to_string()))?,
            );
        }

        if patch.is_empty() {
            return Err(AuthError::Validation("No fields to update".to_string()));
        }

        let affected = self.user_repo.update(id, &patch).await?;

        if affected > 0 {
            tracing::info!(user_id = %id, "User updated");
        }

        Ok(affected)
    }
}
