//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{NewUser, Session, User, UserCredentials, UserPatch};
use crate::domain::value_object::Email;
use crate::error::AuthResult;
use kernel::id::UserId;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, returning the stored row
    ///
    /// Unique violations on email/username surface as typed errors.
    async fn create(&self, new_user: &NewUser) -> AuthResult<User>;

    /// All users; the read model cannot carry password data
    async fn list(&self) -> AuthResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AuthResult<Option<User>>;

    /// Find user together with the credential hash, for login only
    async fn find_credentials_by_email(&self, email: &Email)
    -> AuthResult<Option<UserCredentials>>;

    /// Apply a partial update; returns affected row count (0 = not found)
    async fn update(&self, id: UserId, patch: &UserPatch) -> AuthResult<u64>;

    /// Delete by id; returns deleted row count (0 = not found)
    async fn delete(&self, id: UserId) -> AuthResult<u64>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find session by ID; an expired record reads as absent
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Update session (activity / sliding expiry)
    async fn update(&self, session: &Session) -> AuthResult<()>;

    /// Delete a session; returns deleted row count (0 = not found)
    async fn delete(&self, session_id: Uuid) -> AuthResult<u64>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
