//! Server-rendered pages
//!
//! Page handlers follow the same shape as the API handlers: guard
//! (where routed) -> data access -> view model -> render. Templates are
//! deliberately thin; everything interesting happens before the render
//! call.

use askama::Template;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use auth::middleware::{AuthMiddlewareState, attach_session_state, require_session_page};
use auth::PgAuthRepository;
use content::PgContentRepository;

mod dashboard;
mod home;

/// Shared state for page handlers
#[derive(Clone)]
pub struct PagesState {
    pub content: Arc<PgContentRepository>,
    pub users: Arc<PgAuthRepository>,
}

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

/// Create the pages router
pub fn pages_router(
    content: PgContentRepository,
    users: PgAuthRepository,
    mw_state: AuthMiddlewareState<PgAuthRepository>,
) -> Router {
    let state = PagesState {
        content: Arc::new(content),
        users: Arc::new(users),
    };

    let mw_public = mw_state.clone();
    let public = Router::new()
        .route("/", get(home::homepage))
        .route("/post/{id}", get(home::single_post))
        .route("/login", get(home::login_page))
        .route("/signup", get(home::signup_page))
        .layer(middleware::from_fn(
            move |req: axum::extract::Request, next: middleware::Next| {
                let mw_state = mw_public.clone();
                async move { attach_session_state(mw_state, req, next).await }
            },
        ));

    let protected = Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/edit/{id}", get(dashboard::edit_post))
        .route("/dashboard/edituser", get(dashboard::edit_user))
        .route_layer(middleware::from_fn(
            move |req: axum::extract::Request, next: middleware::Next| {
                let mw_state = mw_state.clone();
                async move { require_session_page(mw_state, req, next).await }
            },
        ));

    public.merge(protected).with_state(state)
}
