//! Server application models.
//!
//! Application state shared by handlers, database model aliases, and typed session wrappers.

pub mod app;
pub mod db;
pub mod dto;
pub mod session;
