//! User Activity Read Model
//!
//! The user-detail view: profile plus everything the user wrote. The
//! profile projection is password-free by construction.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::entity::comment::CommentWithPost;

/// Password-free user projection for the activity view
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// A user's post without the comment tree
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub post_text: String,
    pub created_at: DateTime<Utc>,
}

/// User profile with posts and comments (comments carry post titles)
#[derive(Debug, Clone)]
pub struct UserActivity {
    pub user: UserProfile,
    pub posts: Vec<PostSummary>,
    pub comments: Vec<CommentWithPost>,
}
