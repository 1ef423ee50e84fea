//! Content Router

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::domain::repository::SessionRepository;
use auth::middleware::{AuthMiddlewareState, require_session_api};

use crate::domain::repository::ContentRepository;
use crate::infra::postgres::PgContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Create the Content router with PostgreSQL repository
pub fn content_router<S>(repo: PgContentRepository, mw_state: AuthMiddlewareState<S>) -> Router
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    content_router_generic(repo, mw_state)
}

/// Create a generic Content router for any repository implementation
pub fn content_router_generic<R, S>(repo: R, mw_state: AuthMiddlewareState<S>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    // Mutations require a logged-in session; the guard inserts
    // CurrentUser so create handlers know the owner.
    let protected = Router::new()
        .route("/posts", post(handlers::create_post::<R>))
        .route(
            "/posts/{id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route("/comments", post(handlers::create_comment::<R>))
        .route("/comments/{id}", delete(handlers::delete_comment::<R>))
        .route_layer(middleware::from_fn(
            move |req: axum::extract::Request, next: middleware::Next| {
                let mw_state = mw_state.clone();
                async move { require_session_api(mw_state, req, next).await }
            },
        ));

    Router::new()
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts/{id}", get(handlers::get_post::<R>))
        .route("/comments", get(handlers::list_comments::<R>))
        .route("/users/{id}", get(handlers::get_user_activity::<R>))
        .merge(protected)
        .with_state(state)
}
