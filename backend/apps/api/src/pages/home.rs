//! Public pages: feed, single post, login, signup

use askama::Template;
use axum::extract::{Extension, Path, State};
use axum::response::{IntoResponse, Redirect, Response};

use auth::middleware::SessionState;
use content::domain::repository::ContentRepository;
use content::models::PostDetail;
use kernel::error::app_error::{AppResult, OptionExt};
use kernel::id::Id;

use super::{Html, PagesState};

#[derive(Template)]
#[template(path = "homepage.html")]
pub struct HomepageTemplate {
    pub posts: Vec<PostDetail>,
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "single-post.html")]
pub struct SinglePostTemplate {
    pub post: PostDetail,
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate;

/// GET /
pub async fn homepage(
    State(state): State<PagesState>,
    Extension(session): Extension<SessionState>,
) -> AppResult<Response> {
    let posts = state.content.feed().await.map_err(|e| e.to_app_error())?;

    Ok(Html(HomepageTemplate {
        posts,
        logged_in: session.logged_in,
    })
    .into_response())
}

/// GET /post/{id}
pub async fn single_post(
    State(state): State<PagesState>,
    Extension(session): Extension<SessionState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let post = state
        .content
        .find_post(Id::from_i64(id))
        .await
        .map_err(|e| e.to_app_error())?
        .ok_or_not_found("No post found with this id")?;

    Ok(Html(SinglePostTemplate {
        post,
        logged_in: session.logged_in,
    })
    .into_response())
}

/// GET /login - already-authenticated visitors go home
pub async fn login_page(Extension(session): Extension<SessionState>) -> Response {
    if session.logged_in {
        return Redirect::to("/").into_response();
    }

    Html(LoginTemplate).into_response()
}

/// GET /signup - already-authenticated visitors go home
pub async fn signup_page(Extension(session): Extension<SessionState>) -> Response {
    if session.logged_in {
        return Redirect::to("/").into_response();
    }

    Html(SignupTemplate).into_response()
}
