//! Accounts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases (register, login, profile, admin)
//! - `infra/` - Postgres and in-memory store implementations
//! - `presentation/` - HTTP handlers, DTOs, bearer-token guard, router
//!
//! ## Features
//! - Registration with email + password (role `user` by default)
//! - Login returning a signed, expiring bearer token
//! - Self-service profile updates (name, age)
//! - Admin-only user listing and deletion
//!
//! ## Security Model
//! - Passwords hashed with Argon2id; hashes never leave the crate boundary
//! - Login failures are indistinguishable (unknown email vs wrong password)
//! - Stateless bearer tokens; the guard re-resolves the user on every request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::entity::user::User;
pub use domain::repository::UserRepository;
pub use domain::value_object::{email::Email, user_role::UserRole};
pub use error::{AccountError, AccountResult};
pub use infra::memory::InMemoryAccountStore;
pub use infra::postgres::PgAccountStore;
pub use presentation::guard;
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
