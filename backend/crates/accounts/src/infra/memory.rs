//! In-Memory Repository Implementation
//!
//! HashMap behind an `RwLock`. Backs the test suites and database-free
//! local runs; returns clones, never references into the map.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// In-memory account store
#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    inner: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, User>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, User>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserRepository for InMemoryAccountStore {
    async fn create(&self, user: &User) -> AccountResult<()> {
        self.write().insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>> {
        Ok(self.read().get(user_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>> {
        Ok(self
            .read()
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        Ok(self.read().values().any(|u| u.email == *email))
    }

    async fn update(&self, user: &User) -> AccountResult<()> {
        self.write().insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AccountResult<bool> {
        Ok(self.write().remove(user_id.as_uuid()).is_some())
    }

    async fn list(&self) -> AccountResult<Vec<User>> {
        let mut users: Vec<User> = self.read().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }
}
