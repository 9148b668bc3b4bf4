//! Presentation Layer
//!
//! HTTP handlers, DTOs, the bearer-token guard, and the router.

pub mod dto;
pub mod guard;
pub mod handlers;
pub mod router;

pub use handlers::AccountsAppState;
pub use router::{users_router, users_router_generic};
