//! Presentation Layer
//!
//! HTTP handlers, DTOs, and the router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ArticlesAppState;
pub use router::{articles_router, articles_router_generic};
