//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use kernel::id::UserId;
use kernel::response::ApiResponse;
use platform::token::TokenService;
use std::sync::Arc;

use crate::application::{
    DeleteUserUseCase, ListUsersUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
    UpdateProfileInput, UpdateProfileUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    AuthData, LoginRequest, RegisterRequest, UpdateProfileRequest, UserDto,
};
use crate::presentation::guard;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountsAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/users/register
pub async fn register<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = RegisterInput {
        full_name: req.full_name,
        email: req.email,
        password: req.password,
        confirm_password: req.confirm_password,
        age: req.age,
    };

    let (user, token) = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::data(AuthData {
                user: UserDto::from(&user),
                token,
            })
            .with_message("User registered successfully"),
        ),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/users/login
pub async fn login<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let (user, token) = use_case.execute(input).await?;

    Ok(Json(
        ApiResponse::data(AuthData {
            user: UserDto::from(&user),
            token,
        })
        .with_message("Login successful"),
    ))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/users/profile
pub async fn get_profile<R>(
    State(state): State<AccountsAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate(&headers, state.repo.as_ref(), &state.tokens).await?;

    Ok(Json(ApiResponse::data(UserDto::from(&caller))))
}

/// PUT /api/users/profile
pub async fn update_profile<R>(
    State(state): State<AccountsAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate(&headers, state.repo.as_ref(), &state.tokens).await?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone());

    let input = UpdateProfileInput {
        full_name: req.full_name,
        age: req.age,
    };

    let updated = use_case.execute(&caller.user_id, input).await?;

    Ok(Json(
        ApiResponse::data(UserDto::from(&updated)).with_message("Profile updated successfully"),
    ))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AccountsAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate(&headers, state.repo.as_ref(), &state.tokens).await?;
    guard::require_role(&caller, &[UserRole::Admin])?;

    let users = ListUsersUseCase::new(state.repo.clone()).execute().await?;
    let dtos: Vec<UserDto> = users.iter().map(UserDto::from).collect();

    Ok(Json(ApiResponse::data(dtos)))
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<AccountsAppState<R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate(&headers, state.repo.as_ref(), &state.tokens).await?;
    guard::require_role(&caller, &[UserRole::Admin])?;

    // Unparsable ids behave like ids that match nothing
    let user_id = UserId::parse(&id).map_err(|_| AccountError::UserNotFound)?;

    DeleteUserUseCase::new(state.repo.clone())
        .execute(&user_id)
        .await?;

    Ok(Json(ApiResponse::message("User deleted successfully")))
}
