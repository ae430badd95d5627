//! Controller tests calling handlers directly with state and session from a test context.

mod army;
mod auth;
mod dashboard;
mod export;
mod mini;
mod router;
mod squad;

use painttracker_test_utils::prelude::*;

use crate::util::TestContextExt;
