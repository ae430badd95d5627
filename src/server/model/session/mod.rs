//! Session data models.
//!
//! Type-safe wrappers for values kept in the Redis backed tower-sessions store.

pub mod auth;
pub mod user;
