//! Utility functions for server operations.
//!
//! Request validation and normalization, plus time conversions shared by services and export.

pub mod time;
pub mod validation;
