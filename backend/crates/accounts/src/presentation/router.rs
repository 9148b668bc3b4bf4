//! Accounts Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use platform::token::TokenService;
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAccountStore;
use crate::presentation::handlers::{self, AccountsAppState};

/// Create the accounts router with the PostgreSQL store
pub fn users_router(repo: PgAccountStore, tokens: Arc<TokenService>) -> Router {
    users_router_generic(repo, tokens)
}

/// Create a generic accounts router for any repository implementation
pub fn users_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AccountsAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route(
            "/profile",
            get(handlers::get_profile::<R>).put(handlers::update_profile::<R>),
        )
        .route("/", get(handlers::list_users::<R>))
        .route("/{id}", delete(handlers::delete_user::<R>))
        .with_state(state)
}
