//! Repository Trait
//!
//! Interface for user persistence. Implementations live in the
//! infrastructure layer; the in-memory variant backs the test suites.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    async fn create(&self, user: &User) -> AccountResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>>;

    /// Find user by normalized email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Update a user in place
    async fn update(&self, user: &User) -> AccountResult<()>;

    /// Delete a user; returns whether a record was removed
    async fn delete(&self, user_id: &UserId) -> AccountResult<bool>;

    /// All users, newest first
    async fn list(&self) -> AccountResult<Vec<User>>;
}
