//! Application Layer
//!
//! Use cases and application services.

pub mod create;
pub mod delete;
pub mod fetch;
pub mod list;
pub mod stats;
pub mod update;

// Re-exports
pub use create::{CreateArticleInput, CreateArticleUseCase};
pub use delete::DeleteArticleUseCase;
pub use fetch::GetArticleUseCase;
pub use list::{ArticlePage, ListArticlesInput, ListArticlesUseCase};
pub use stats::ArticleStatsUseCase;
pub use update::{UpdateArticleInput, UpdateArticleUseCase};
