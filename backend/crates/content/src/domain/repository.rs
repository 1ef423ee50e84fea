//! Repository Trait
//!
//! Interface for posts/comments persistence and the relation-aware
//! reads. Implementation is in infrastructure layer.

use crate::domain::entity::{
    Comment, CommentDetail, NewComment, NewPost, Post, PostDetail, PostPatch, UserActivity,
};
use crate::error::ContentResult;
use kernel::id::{CommentId, PostId, UserId};

/// Content repository trait
#[trait_variant::make(ContentRepository: Send)]
pub trait LocalContentRepository {
    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    /// All posts, newest-created-first, with author and comments
    async fn feed(&self) -> ContentResult<Vec<PostDetail>>;

    /// One post with author and comments
    async fn find_post(&self, id: PostId) -> ContentResult<Option<PostDetail>>;

    /// Posts created by one user, newest-created-first
    async fn posts_by_author(&self, user_id: UserId) -> ContentResult<Vec<PostDetail>>;

    /// Insert a new post, returning the stored row
    async fn create_post(&self, new_post: &NewPost) -> ContentResult<Post>;

    /// Apply a partial update; returns affected row count (0 = not found)
    async fn update_post(&self, id: PostId, patch: &PostPatch) -> ContentResult<u64>;

    /// Delete by id; returns deleted row count (0 = not found)
    async fn delete_post(&self, id: PostId) -> ContentResult<u64>;

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    /// All comments with author usernames
    async fn list_comments(&self) -> ContentResult<Vec<CommentDetail>>;

    /// Insert a new comment; a missing parent post is a typed error
    async fn create_comment(&self, new_comment: &NewComment) -> ContentResult<Comment>;

    /// Delete by id; returns deleted row count (0 = not found)
    async fn delete_comment(&self, id: CommentId) -> ContentResult<u64>;

    // ------------------------------------------------------------------
    // User activity
    // ------------------------------------------------------------------

    /// Profile + posts + comments (with parent post titles) for one user
    async fn user_activity(&self, user_id: UserId) -> ContentResult<Option<UserActivity>>;
}
