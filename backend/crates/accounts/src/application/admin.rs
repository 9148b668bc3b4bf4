//! Admin Use Cases
//!
//! User listing and deletion. Role enforcement happens in the guard before
//! these run.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> AccountResult<Vec<User>> {
        self.repo.list().await
    }
}

/// Delete user use case
pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AccountResult<()> {
        let deleted = self.repo.delete(user_id).await?;
        if !deleted {
            return Err(AccountError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
