//! PaintTracker: progress tracking for painting miniature armies.
//!
//! The crate is split between code shared by the Dioxus client and the axum server
//! ([`model`] and [`tracker`]) and the server-only backend in `server`, compiled with the
//! `server` feature.

pub mod model;
pub mod tracker;

#[cfg(feature = "server")]
pub mod server;
