//! Content (Posts & Comments) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, read models, repository trait
//! - `infra/` - Database implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Post CRUD with author usernames and comments eager-loaded
//! - Comments on posts (create/list/delete)
//! - Per-user activity view (profile + posts + comments with post titles)
//!
//! Mutations sit behind the auth crate's session guard; the post/comment
//! owner is always the session user.

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::content_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
