//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, verification never throws)
//! - Stateless bearer tokens (HMAC-SHA256 signed, time-limited)

pub mod password;
pub mod token;
