//! Service layer for business logic.
//!
//! Services validate ownership across repositories, convert database models into DTOs, and turn
//! missing records into [`crate::server::error::tracker::TrackerError`]s. They are the only layer
//! controllers call into.

pub mod army;
pub mod auth;
pub mod dashboard;
pub mod export;
pub mod mini;
pub mod retry;
pub mod squad;
pub mod user;
