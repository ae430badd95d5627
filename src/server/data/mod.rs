//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table and are generic over [`sea_orm::ConnectionTrait`]
//! so they run against a pooled connection or inside a transaction. Army, squad, and mini lookups
//! are always scoped to the owning user.

pub mod army;
pub mod mini;
pub mod squad;
pub mod user;
