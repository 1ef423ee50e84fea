//! Sign Up Use Case
//!
//! Creates a new user account and establishes a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::{NewUser, Session, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{Email, RawPassword, UserPassword, Username};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
    /// Session token for the cookie
    pub session_token: String,
}

/// Sign up use case
pub struct SignUpUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignUpUseCase<U, S>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate fields
        let username = Username::new(input.username)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Validate and hash password (the single hashing step for create)
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.message().to_string()))?;

        // Persist; uniqueness is enforced by the store's constraints
        let user = self
            .user_repo
            .create(&NewUser {
                username,
                email,
                password_hash,
            })
            .await?;

        // Establish the session before responding, so the client never
        // sees a 200 without a usable cookie
        let session = Session::new(
            user.id,
            user.username.as_str().to_string(),
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        let session_token = token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            session_id = %session.session_id,
            "User signed up"
        );

        Ok(SignUpOutput {
            user,
            session_token,
        })
    }
}
