//! Session Entity
//!
//! Server-side record of an authenticated browsing context, referenced
//! by a signed cookie token.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4); the cookie token wraps this
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Username at session creation (denormalized for display)
    pub username: String,
    /// Authorization flag; the guard requires this to be true
    pub logged_in: bool,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new logged-in session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, username: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            username,
            logged_in: true,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Guard predicate: logged in and not expired
    pub fn is_authenticated(&self) -> bool {
        self.logged_in && !self.is_expired()
    }

    /// Record activity and slide the expiry window
    ///
    /// Every touch resets expiry to now + ttl (sliding expiration).
    pub fn touch(&mut self, ttl: Duration) {
        let now = Utc::now();
        self.last_activity_at = now;
        self.expires_at_ms = (now + ttl).timestamp_millis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn two_hours() -> Duration {
        Duration::hours(2)
    }

    #[test]
    fn test_new_session_is_authenticated() {
        let session = Session::new(Id::from_i64(1), "alice".to_string(), two_hours());
        assert!(session.logged_in);
        assert!(!session.is_expired());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_expired_session_is_not_authenticated() {
        let mut session = Session::new(Id::from_i64(1), "alice".to_string(), two_hours());
        session.expires_at_ms = Utc::now().timestamp_millis() - 1;
        assert!(session.is_expired());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_touch_slides_expiry() {
        let mut session = Session::new(Id::from_i64(1), "alice".to_string(), two_hours());
        session.expires_at_ms = Utc::now().timestamp_millis() + 1000;

        session.touch(two_hours());

        let remaining = session.expires_at_ms - Utc::now().timestamp_millis();
        assert!(remaining > Duration::hours(1).num_milliseconds());
    }

    #[test]
    fn test_logged_out_session_is_not_authenticated() {
        let mut session = Session::new(Id::from_i64(1), "alice".to_string(), two_hours());
        session.logged_in = false;
        assert!(!session.is_authenticated());
    }
}
