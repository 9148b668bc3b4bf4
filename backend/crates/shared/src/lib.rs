//! Shared Kernel
//!
//! The smallest vocabulary the feature crates have in common:
//! - Unified error type ([`error::app_error::AppError`]) and its kind
//! - The JSON response envelope every endpoint uses
//! - Typed entity ids
//!
//! Only things that mean the same thing in every domain belong here;
//! anything a single feature crate could own stays out.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod response;
