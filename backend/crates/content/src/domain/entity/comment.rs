//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

use crate::error::{ContentError, ContentResult};

/// Comment entity
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub comment_text: String,
    /// Author (the session user at creation)
    pub user_id: UserId,
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new comment
#[derive(Debug)]
pub struct NewComment {
    pub comment_text: String,
    pub user_id: UserId,
    pub post_id: PostId,
}

impl NewComment {
    /// Create with validation: text must be non-empty
    pub fn new(comment_text: String, user_id: UserId, post_id: PostId) -> ContentResult<Self> {
        if comment_text.trim().is_empty() {
            return Err(ContentError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            comment_text,
            user_id,
            post_id,
        })
    }
}

/// Comment with its author's username
#[derive(Debug, Clone)]
pub struct CommentDetail {
    pub id: CommentId,
    pub comment_text: String,
    pub post_id: PostId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    /// Author username
    pub username: String,
}

/// Comment with its parent post's title (user activity view)
#[derive(Debug, Clone)]
pub struct CommentWithPost {
    pub id: CommentId,
    pub comment_text: String,
    pub post_id: PostId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    /// Parent post title
    pub post_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    #[test]
    fn test_new_comment_validation() {
        assert!(NewComment::new("Nice post".into(), Id::from_i64(1), Id::from_i64(2)).is_ok());
        assert!(NewComment::new("  ".into(), Id::from_i64(1), Id::from_i64(2)).is_err());
    }
}
