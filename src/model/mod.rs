//! Data transfer objects shared between the client and the server.
//!
//! Everything in here is serialized as camelCase JSON, matching the wire format of the
//! `/api` routes.

pub mod api;
pub mod army;
pub mod dashboard;
pub mod mini;
pub mod squad;
pub mod stage;
pub mod user;
