//! Test utilities for PaintTracker.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, fixtures, and mock OAuth
//! endpoints, then `build()` produces a [`TestContext`] holding an in-memory SQLite database, a
//! memory backed session, and the mockito server. Fixture accessors such as
//! [`TestContext::user`] and [`TestContext::tracker`] insert further records during the test.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant, test_setup_with_tables, test_setup_with_tracker_tables, TestBuilder,
        TestContext, TestError,
    };
}
