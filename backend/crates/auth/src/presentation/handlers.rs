//! HTTP Handlers
//!
//! Stateless handlers: guard (where routed) -> data access -> response.
//! Only the login/signup paths take more than one store round trip.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase, UpdateUserInput,
    UpdateUserUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AffectedResponse, DeletedResponse, LoginRequest, LoginResponse, SignUpRequest,
    UpdateUserRequest, UserResponse,
};
use kernel::id::Id;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// List Users
// ============================================================================

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let users = state.repo.list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/users
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from(output.user)),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/users/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            user: UserResponse::from(output.user),
            message: "You are logged in!".to_string(),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/users/logout
///
/// 204 on success; 404 when there is no active session to destroy.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
        .ok_or(AuthError::NoActiveSession)?;

    let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(&token).await?;

    let cookie = build_clear_cookie(&state.config);

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Update / Delete (guarded in the router)
// ============================================================================

/// PUT /api/users/{id}
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> AuthResult<Json<AffectedResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateUserUseCase::new(state.repo.clone(), state.config.clone());

    let affected = use_case
        .execute(
            Id::from_i64(id),
            UpdateUserInput {
                username: req.username,
                email: req.email,
                password: req.password,
            },
        )
        .await?;

    if affected == 0 {
        return Err(AuthError::UserNotFound);
    }

    Ok(Json(AffectedResponse { affected }))
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<i64>,
) -> AuthResult<Json<DeletedResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let deleted = UserRepository::delete(&*state.repo, Id::from_i64(id)).await?;

    if deleted == 0 {
        return Err(AuthError::UserNotFound);
    }

    Ok(Json(DeletedResponse { deleted }))
}

// ============================================================================
// Cookie helpers
// ============================================================================

fn build_session_cookie(config: &AuthConfig, token: &str) -> String {
    config.cookie().build_set_cookie(token)
}

fn build_clear_cookie(config: &AuthConfig) -> String {
    config.cookie().build_delete_cookie()
}
