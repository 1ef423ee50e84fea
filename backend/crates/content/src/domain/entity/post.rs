//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::entity::comment::CommentDetail;
use crate::error::{ContentError, ContentResult};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub post_text: String,
    /// Owner (the session user at creation)
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new post
#[derive(Debug)]
pub struct NewPost {
    pub title: String,
    pub post_text: String,
    pub user_id: UserId,
}

impl NewPost {
    /// Create with validation: title and body must be non-empty
    pub fn new(title: String, post_text: String, user_id: UserId) -> ContentResult<Self> {
        if title.trim().is_empty() {
            return Err(ContentError::Validation("Title cannot be empty".to_string()));
        }
        if post_text.trim().is_empty() {
            return Err(ContentError::Validation(
                "Post text cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            title,
            post_text,
            user_id,
        })
    }
}

/// Partial update for a post row
#[derive(Debug, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub post_text: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.post_text.is_none()
    }
}

/// Post with author username and comments eager-loaded
///
/// The shape the feed, single-post and dashboard reads share.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub id: PostId,
    pub title: String,
    pub post_text: String,
    pub created_at: DateTime<Utc>,
    /// Author username
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    #[test]
    fn test_new_post_validation() {
        assert!(NewPost::new("Title".into(), "Body".into(), Id::from_i64(1)).is_ok());
        assert!(NewPost::new("".into(), "Body".into(), Id::from_i64(1)).is_err());
        assert!(NewPost::new("Title".into(), "   ".into(), Id::from_i64(1)).is_err());
    }
}
