//! Login Use Case
//!
//! Authenticates a user and issues a bearer token. Every failure past the
//! presence check collapses to the same `InvalidCredentials` error so the
//! response never reveals whether the email exists.

use std::sync::Arc;

use platform::password::PlainPassword;
use platform::token::TokenService;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<(User, String)> {
        let (email_raw, password_raw) = match (input.email, input.password) {
            (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => (e, p),
            _ => return Err(AccountError::MissingCredentials),
        };

        let email = Email::new(email_raw).map_err(|_| AccountError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let password =
            PlainPassword::new(password_raw).map_err(|_| AccountError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.tokens.issue(*user.user_id.as_uuid());

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok((user, token))
    }
}
