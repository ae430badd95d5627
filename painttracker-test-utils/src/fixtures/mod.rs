//! Fixtures inserting records and creating mock endpoints while a test runs.
//!
//! - `auth` - mock OAuth token and user info endpoints
//! - `tracker` - armies, squads, and minis
//! - `user` - PaintTracker user accounts

pub mod auth;
pub mod tracker;
pub mod user;
