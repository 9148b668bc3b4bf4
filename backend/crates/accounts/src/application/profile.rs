//! Update Profile Use Case
//!
//! Partial self-service update. Absent fields stay untouched; `age` uses a
//! nested option so an explicit `null` clears the value while omission
//! leaves it alone.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};

/// Update profile input
pub struct UpdateProfileInput {
    /// New display name; `None` leaves the current name
    pub full_name: Option<String>,
    /// `None` = untouched, `Some(None)` = clear, `Some(Some(n))` = set
    pub age: Option<Option<i32>>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: UpdateProfileInput,
    ) -> AccountResult<User> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        if let Some(full_name) = input.full_name {
            if full_name.trim().is_empty() {
                return Err(AccountError::Validation(
                    "Full name cannot be empty".to_string(),
                ));
            }
            user.set_full_name(full_name);
        }

        if let Some(age) = input.age {
            user.set_age(age);
        }

        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
