//! User Entity
//!
//! A registered account. The password hash travels with the entity so the
//! store stays a single table; it is stripped at the DTO boundary and never
//! serialized.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub full_name: String,
    /// Normalized (lowercased) unique email
    pub email: Email,
    /// Argon2id PHC hash; never exposed through the API
    pub password_hash: HashedPassword,
    /// Role (User, Editor, Admin)
    pub role: UserRole,
    /// Optional age
    pub age: Option<i32>,
    /// Active flag
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default role.
    pub fn new(full_name: impl Into<String>, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            full_name: full_name.into(),
            email,
            password_hash,
            role: UserRole::default(),
            age: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Update the display name.
    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    /// Set or clear the age.
    pub fn set_age(&mut self, age: Option<i32>) {
        self.age = age;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::PlainPassword;

    fn sample_user() -> User {
        let email = Email::new("sample@example.com").unwrap();
        let hash = PlainPassword::new("a sample password").unwrap().hash().unwrap();
        User::new("Sample User", email, hash)
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.age, None);
        assert!(user.is_active);
        assert!(!user.role.is_editor_or_higher());
    }

    #[test]
    fn test_set_age_and_clear() {
        let mut user = sample_user();
        user.set_age(Some(30));
        assert_eq!(user.age, Some(30));
        user.set_age(None);
        assert_eq!(user.age, None);
    }
}
