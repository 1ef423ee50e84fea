//! HTTP Handlers
//!
//! Stateless handlers: guard (where routed) -> data access -> response.
//! Owners are taken from the resolved session, never from the body.

use axum::Json;
use axum::extract::{Extension, Path, State};
use std::sync::Arc;

use auth::middleware::CurrentUser;

use crate::domain::entity::{NewComment, NewPost, PostPatch};
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};
use crate::presentation::dto::{
    AffectedResponse, CommentDetailResponse, CommentResponse, CreateCommentRequest,
    CreatePostRequest, DeletedResponse, PostDetailResponse, PostResponse, UpdatePostRequest,
    UserActivityResponse,
};
use kernel::id::Id;

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Posts
// ============================================================================

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<PostDetailResponse>>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let posts = state.repo.feed().await?;

    Ok(Json(
        posts.into_iter().map(PostDetailResponse::from).collect(),
    ))
}

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i64>,
) -> ContentResult<Json<PostDetailResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let post = state
        .repo
        .find_post(Id::from_i64(id))
        .await?
        .ok_or(ContentError::PostNotFound)?;

    Ok(Json(PostDetailResponse::from(post)))
}

/// POST /api/posts (guarded)
pub async fn create_post<R>(
    State(state): State<ContentAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> ContentResult<Json<PostResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let new_post = NewPost::new(req.title, req.post_text, current_user.user_id)?;

    let post = state.repo.create_post(&new_post).await?;

    tracing::info!(post_id = %post.id, user_id = %post.user_id, "Post created");

    Ok(Json(PostResponse::from(post)))
}

/// PUT /api/posts/{id} (guarded)
pub async fn update_post<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> ContentResult<Json<AffectedResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let patch = PostPatch {
        title: req.title,
        post_text: req.post_text,
    };

    if patch.is_empty() {
        return Err(ContentError::Validation("No fields to update".to_string()));
    }

    let affected = state.repo.update_post(Id::from_i64(id), &patch).await?;

    if affected == 0 {
        return Err(ContentError::PostNotFound);
    }

    Ok(Json(AffectedResponse { affected }))
}

/// DELETE /api/posts/{id} (guarded)
pub async fn delete_post<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i64>,
) -> ContentResult<Json<DeletedResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let deleted = state.repo.delete_post(Id::from_i64(id)).await?;

    if deleted == 0 {
        return Err(ContentError::PostNotFound);
    }

    Ok(Json(DeletedResponse { deleted }))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/comments
pub async fn list_comments<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<CommentDetailResponse>>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let comments = state.repo.list_comments().await?;

    Ok(Json(
        comments
            .into_iter()
            .map(CommentDetailResponse::from)
            .collect(),
    ))
}

/// POST /api/comments (guarded)
pub async fn create_comment<R>(
    State(state): State<ContentAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<CreateCommentRequest>,
) -> ContentResult<Json<CommentResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let new_comment = NewComment::new(req.comment_text, current_user.user_id, req.post_id)?;

    let comment = state.repo.create_comment(&new_comment).await?;

    tracing::info!(
        comment_id = %comment.id,
        post_id = %comment.post_id,
        "Comment created"
    );

    Ok(Json(CommentResponse::from(comment)))
}

/// DELETE /api/comments/{id} (guarded)
pub async fn delete_comment<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i64>,
) -> ContentResult<Json<DeletedResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let deleted = state.repo.delete_comment(Id::from_i64(id)).await?;

    if deleted == 0 {
        return Err(ContentError::CommentNotFound);
    }

    Ok(Json(DeletedResponse { deleted }))
}

// ============================================================================
// User activity
// ============================================================================

/// GET /api/users/{id}
pub async fn get_user_activity<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i64>,
) -> ContentResult<Json<UserActivityResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let activity = state
        .repo
        .user_activity(Id::from_i64(id))
        .await?
        .ok_or(ContentError::UserNotFound)?;

    Ok(Json(UserActivityResponse::from(activity)))
}
