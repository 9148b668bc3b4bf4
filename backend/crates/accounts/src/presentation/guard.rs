//! Access Control Guard
//!
//! Resolves the caller from a request's `Authorization: Bearer` header and
//! enforces role membership. The guard is a pure function of the headers,
//! the user store, and the token service; the resolved [`User`] is handed
//! to the use cases explicitly instead of being attached to the request.
//!
//! Failure ladder:
//! - no bearer header            -> 401 "no token provided"
//! - malformed/tampered/expired  -> 401 "token failed"
//! - token valid, user deleted   -> 401 "user not found"
//! - user resolved, role wrong   -> 403

use axum::http::{HeaderMap, header};
use kernel::id::UserId;
use platform::token::TokenService;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AccountError, AccountResult};

/// Resolve the authenticated caller or fail with the appropriate 401.
pub async fn authenticate<R>(
    headers: &HeaderMap,
    repo: &R,
    tokens: &TokenService,
) -> AccountResult<User>
where
    R: UserRepository,
{
    let token = bearer_token(headers).ok_or(AccountError::NoToken)?;

    let user_id = tokens
        .verify(token)
        .map_err(|_| AccountError::TokenRejected)?;

    let user = repo
        .find_by_id(&UserId::from_uuid(user_id))
        .await?
        .ok_or(AccountError::TokenUserMissing)?;

    Ok(user)
}

/// Resolve the caller when possible; anonymous otherwise.
///
/// For public endpoints whose behavior upgrades with a valid token. A bad
/// token degrades to anonymous instead of failing the request.
pub async fn authenticate_opt<R>(
    headers: &HeaderMap,
    repo: &R,
    tokens: &TokenService,
) -> Option<User>
where
    R: UserRepository,
{
    authenticate(headers, repo, tokens).await.ok()
}

/// Enforce that the caller's role is in the allowed set.
pub fn require_role(user: &User, allowed: &[UserRole]) -> AccountResult<()> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AccountError::RoleForbidden(user.role.code().to_string()))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
