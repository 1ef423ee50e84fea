//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Destroy the session behind the token
    ///
    /// A missing, invalid, or already-destroyed session reports
    /// `NoActiveSession`; subsequent reads of the token see nothing.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = token::verify(session_token, &self.config.session_secret)
            .ok_or(AuthError::NoActiveSession)?;

        let deleted = self.session_repo.delete(session_id).await?;
        if deleted == 0 {
            return Err(AuthError::NoActiveSession);
        }

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}
