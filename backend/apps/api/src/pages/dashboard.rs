//! Dashboard pages (session-protected in the router)

use askama::Template;
use axum::extract::{Extension, Path, State};
use axum::response::{IntoResponse, Response};

use auth::domain::entity::User;
use auth::domain::repository::UserRepository;
use auth::middleware::CurrentUser;
use content::domain::repository::ContentRepository;
use content::models::PostDetail;
use kernel::error::app_error::{AppResult, OptionExt};
use kernel::id::Id;

use super::{Html, PagesState};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub posts: Vec<PostDetail>,
    pub username: String,
}

#[derive(Template)]
#[template(path = "edit-post.html")]
pub struct EditPostTemplate {
    pub post: PostDetail,
}

#[derive(Template)]
#[template(path = "edit-user.html")]
pub struct EditUserTemplate {
    pub user: User,
}

/// GET /dashboard - the session user's own posts
pub async fn dashboard(
    State(state): State<PagesState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Response> {
    let posts = state
        .content
        .posts_by_author(current_user.user_id)
        .await
        .map_err(|e| e.to_app_error())?;

    Ok(Html(DashboardTemplate {
        posts,
        username: current_user.username,
    })
    .into_response())
}

/// GET /dashboard/edit/{id}
pub async fn edit_post(
    State(state): State<PagesState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let post = state
        .content
        .find_post(Id::from_i64(id))
        .await
        .map_err(|e| e.to_app_error())?
        .ok_or_not_found("No post found with this id")?;

    Ok(Html(EditPostTemplate { post }).into_response())
}

/// GET /dashboard/edituser - the session user's own profile
pub async fn edit_user(
    State(state): State<PagesState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Response> {
    let user = state
        .users
        .find_by_id(current_user.user_id)
        .await
        .map_err(|e| e.to_app_error())?
        .ok_or_not_found("No user found with this id")?;

    Ok(Html(EditUserTemplate { user }).into_response())
}
