//! Auth Middleware
//!
//! The authentication guard: a predicate check gating protected routes.
//! On failure the request is short-circuited with no further processing;
//! API routes get 401, page routes get a redirect to /login.

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::Session;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;
use kernel::id::UserId;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// Resolved session identity, stored in request extensions by the guard
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
    pub session_id: Uuid,
}

impl From<&Session> for CurrentUser {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id,
            username: session.username.clone(),
            session_id: session.session_id,
        }
    }
}

/// Session presence flag for public pages (never blocks)
#[derive(Debug, Clone, Copy)]
pub struct SessionState {
    pub logged_in: bool,
}

/// Guard for API routes: 401 without a valid logged-in session
pub async fn require_session_api<S>(
    state: AuthMiddlewareState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    match resolve_session(&state, req.headers()).await {
        Some(session) => {
            req.extensions_mut().insert(CurrentUser::from(&session));
            Ok(next.run(req).await)
        }
        None => Err(AuthError::SessionInvalid.into_response()),
    }
}

/// Guard for page routes: redirect to /login without a valid session
pub async fn require_session_page<S>(
    state: AuthMiddlewareState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    match resolve_session(&state, req.headers()).await {
        Some(session) => {
            req.extensions_mut().insert(CurrentUser::from(&session));
            Ok(next.run(req).await)
        }
        None => Err(Redirect::to("/login").into_response()),
    }
}

/// Non-blocking variant for public pages
///
/// Inserts [`SessionState`] so templates can branch on login status.
pub async fn attach_session_state<S>(
    state: AuthMiddlewareState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let logged_in = resolve_session(&state, req.headers()).await.is_some();

    req.extensions_mut().insert(SessionState { logged_in });

    next.run(req).await
}

/// Resolve a valid, logged-in, unexpired session from the cookie
///
/// Any failure (missing cookie, bad signature, expired or logged-out
/// record) reads as "no session".
async fn resolve_session<S>(state: &AuthMiddlewareState<S>, headers: &HeaderMap) -> Option<Session>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(headers, &state.config.session_cookie_name)?;

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    use_case.get_session(&token).await.ok()
}
