//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_session_api};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let mw_state = AuthMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    // Mutations on user rows require a logged-in session. Logout is not
    // behind the guard: without a session it answers 404, not 401.
    let protected = Router::new()
        .route(
            "/users/{id}",
            put(handlers::update_user::<R>).delete(handlers::delete_user::<R>),
        )
        .route_layer(middleware::from_fn(
            move |req: axum::extract::Request, next: middleware::Next| {
                let mw_state = mw_state.clone();
                async move { require_session_api(mw_state, req, next).await }
            },
        ));

    Router::new()
        .route(
            "/users",
            get(handlers::list_users::<R>).post(handlers::sign_up::<R>),
        )
        .route("/users/login", post(handlers::login::<R>))
        .route("/users/logout", post(handlers::logout::<R>))
        .merge(protected)
        .with_state(state)
}
