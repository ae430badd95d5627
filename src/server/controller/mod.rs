//! HTTP controller endpoints for the PaintTracker web API.
//!
//! Controllers resolve the signed in user from the session, validate path and body input, call
//! into the services, and shape the HTTP response. Every endpoint carries a utoipa annotation
//! collected into the OpenAPI document by [`crate::server::router`].

pub mod army;
pub mod auth;
pub mod dashboard;
pub mod export;
pub mod mini;
pub mod squad;
pub mod util;
