//! Articles Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Article entity, value objects, repository trait
//! - `application/` - Use cases (list, fetch, create, update, delete, stats)
//! - `infra/` - Postgres and in-memory store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Public listing with status/category filters, search, and pagination
//! - Slug-addressed reads that count views
//! - Create/update/delete guarded by role and ownership
//! - Aggregate statistics for the dashboard
//!
//! ## Visibility Model
//! - Anyone sees published articles
//! - Drafts and archived articles require an editor or admin caller
//! - Authors own their articles: they may update them at any role, but
//!   only the author or an admin may delete

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::entity::article::Article;
pub use domain::repository::ArticleRepository;
pub use domain::value_object::{category::Category, slug::Slug, status::ArticleStatus};
pub use error::{ArticleError, ArticleResult};
pub use infra::memory::InMemoryArticleStore;
pub use infra::postgres::PgArticleStore;
pub use presentation::router::{articles_router, articles_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
