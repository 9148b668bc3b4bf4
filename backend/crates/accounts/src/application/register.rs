//! Register Use Case
//!
//! Creates a new user account and issues its first bearer token.

use std::sync::Arc;

use platform::password::{PasswordPolicyError, PlainPassword};
use platform::token::TokenService;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// Register input. Fields arrive as options so missing and blank values
/// produce the validation error, not a deserialization failure.
pub struct RegisterInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub age: Option<i32>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<(User, String)> {
        let full_name = required(input.full_name)?;
        let email_raw = required(input.email)?;
        let password_raw = required(input.password)?;
        let confirm_raw = required(input.confirm_password)?;

        if password_raw != confirm_raw {
            return Err(AccountError::PasswordMismatch);
        }

        let email = Email::new(email_raw)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AccountError::EmailTaken);
        }

        let password = PlainPassword::new(password_raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => AccountError::MissingFields,
            other => AccountError::Validation(other.to_string()),
        })?;
        let password_hash = password.hash()?;

        let mut user = User::new(full_name, email, password_hash);
        user.age = input.age;

        self.repo.create(&user).await?;

        let token = self.tokens.issue(*user.user_id.as_uuid());

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok((user, token))
    }
}

/// Presence check treating blank strings the same as absent fields.
/// The value itself is returned untouched (passwords must not be trimmed).
fn required(field: Option<String>) -> AccountResult<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AccountError::MissingFields),
    }
}
