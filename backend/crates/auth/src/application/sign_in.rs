//! Sign In Use Case
//!
//! Authenticates a user by email + password and creates a session.
//!
//! State machine per request:
//! lookup user -> (absent: reject) -> verify password -> (mismatch:
//! reject) -> write session -> done. Neither rejection mutates session
//! state.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::{Session, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub user: User,
    /// Session token for the cookie
    pub session_token: String,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A malformed email cannot belong to any account
        let email = Email::new(input.email).map_err(|_| AuthError::UnknownEmail)?;

        let credentials = self
            .user_repo
            .find_credentials_by_email(&email)
            .await?
            .ok_or(AuthError::UnknownEmail)?;

        // Any stored password satisfies the policy, so a submission that
        // fails it is definitionally a mismatch
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::IncorrectPassword)?;

        if !credentials
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::IncorrectPassword);
        }

        let user = credentials.user;

        // Session write is acknowledged before the response is built
        let session = Session::new(
            user.id,
            user.username.as_str().to_string(),
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        let session_token = token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            user,
            session_token,
        })
    }
}
