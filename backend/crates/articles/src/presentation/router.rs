//! Articles Router
//!
//! Route order matters only for `/stats`, which must not be captured by
//! the `/{name}` segment; axum prefers the static route.

use axum::{Router, routing::get};
use platform::token::TokenService;
use std::sync::Arc;

use accounts::domain::repository::UserRepository;
use accounts::infra::postgres::PgAccountStore;

use crate::domain::repository::ArticleRepository;
use crate::infra::postgres::PgArticleStore;
use crate::presentation::handlers::{self, ArticlesAppState};

/// Create the articles router with the PostgreSQL stores
pub fn articles_router(
    articles: PgArticleStore,
    accounts: PgAccountStore,
    tokens: Arc<TokenService>,
) -> Router {
    articles_router_generic(articles, accounts, tokens)
}

/// Create a generic articles router for any store implementations
pub fn articles_router_generic<A, U>(articles: A, accounts: U, tokens: Arc<TokenService>) -> Router
where
    A: ArticleRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ArticlesAppState {
        articles: Arc::new(articles),
        accounts: Arc::new(accounts),
        tokens,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_articles::<A, U>).post(handlers::create_article::<A, U>),
        )
        .route("/stats", get(handlers::article_stats::<A, U>))
        .route(
            "/{name}",
            get(handlers::get_article::<A, U>)
                .put(handlers::update_article::<A, U>)
                .delete(handlers::delete_article::<A, U>),
        )
        .with_state(state)
}
