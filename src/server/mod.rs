//! Server application core modules.
//!
//! This module contains all server-side functionality for PaintTracker: HTTP routing, OAuth
//! authentication, sessions, validation, and the army, squad, and mini storage behind the
//! dashboard.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
