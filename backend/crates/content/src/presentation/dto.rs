//! API DTOs (Data Transfer Objects)
//!
//! Wire format uses snake_case field names throughout.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    Comment, CommentDetail, CommentWithPost, Post, PostDetail, PostSummary, UserActivity,
};

// ============================================================================
// Posts
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub post_text: String,
}

/// Partial post update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub post_text: Option<String>,
}

/// Created/raw post representation
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub post_text: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            post_text: post.post_text,
            user_id: post.user_id,
            created_at: post.created_at,
        }
    }
}

/// Post with author and comments (feed and single-post reads)
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    pub id: PostId,
    pub title: String,
    pub post_text: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetailResponse>,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            post_text: detail.post_text,
            created_at: detail.created_at,
            username: detail.username,
            comments: detail
                .comments
                .into_iter()
                .map(CommentDetailResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// Comments
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub comment_text: String,
    pub post_id: PostId,
}

/// Created/raw comment representation
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub comment_text: String,
    pub user_id: UserId,
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            comment_text: comment.comment_text,
            user_id: comment.user_id,
            post_id: comment.post_id,
            created_at: comment.created_at,
        }
    }
}

/// Comment with author username
#[derive(Debug, Clone, Serialize)]
pub struct CommentDetailResponse {
    pub id: CommentId,
    pub comment_text: String,
    pub post_id: PostId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub username: String,
}

impl From<CommentDetail> for CommentDetailResponse {
    fn from(detail: CommentDetail) -> Self {
        Self {
            id: detail.id,
            comment_text: detail.comment_text,
            post_id: detail.post_id,
            user_id: detail.user_id,
            created_at: detail.created_at,
            username: detail.username,
        }
    }
}

// ============================================================================
// User activity
// ============================================================================

/// User profile with posts and comments
#[derive(Debug, Clone, Serialize)]
pub struct UserActivityResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub posts: Vec<PostSummaryResponse>,
    pub comments: Vec<CommentWithPostResponse>,
}

impl From<UserActivity> for UserActivityResponse {
    fn from(activity: UserActivity) -> Self {
        Self {
            id: activity.user.id,
            username: activity.user.username,
            email: activity.user.email,
            posts: activity
                .posts
                .into_iter()
                .map(PostSummaryResponse::from)
                .collect(),
            comments: activity
                .comments
                .into_iter()
                .map(CommentWithPostResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostSummaryResponse {
    pub id: PostId,
    pub title: String,
    pub post_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(summary: PostSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            post_text: summary.post_text,
            created_at: summary.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentWithPostResponse {
    pub id: CommentId,
    pub comment_text: String,
    pub post_id: PostId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub post_title: String,
}

impl From<CommentWithPost> for CommentWithPostResponse {
    fn from(comment: CommentWithPost) -> Self {
        Self {
            id: comment.id,
            comment_text: comment.comment_text,
            post_id: comment.post_id,
            user_id: comment.user_id,
            created_at: comment.created_at,
            post_title: comment.post_title,
        }
    }
}

// ============================================================================
// Mutation results
// ============================================================================

/// Update result
#[derive(Debug, Clone, Serialize)]
pub struct AffectedResponse {
    pub affected: u64,
}

/// Delete result
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    #[test]
    fn test_activity_response_shape() {
        let activity = UserActivity {
            user: crate::domain::entity::UserProfile {
                id: Id::from_i64(1),
                username: "alice".to_string(),
                email: "a@b.com".to_string(),
            },
            posts: vec![],
            comments: vec![CommentWithPost {
                id: Id::from_i64(5),
                comment_text: "Nice".to_string(),
                post_id: Id::from_i64(2),
                user_id: Id::from_i64(1),
                created_at: Utc::now(),
                post_title: "Hello".to_string(),
            }],
        };

        let json = serde_json::to_value(UserActivityResponse::from(activity)).unwrap();
        assert_eq!(json["username"], "alice");
        assert!(json.get("password").is_none());
        assert_eq!(json["comments"][0]["post_title"], "Hello");
    }
}
