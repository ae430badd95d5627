//! Database model type aliases.

/// A PaintTracker account, identified by its OAuth subject.
pub type UserModel = entity::painttracker_user::Model;

pub type ArmyModel = entity::army::Model;

pub type SquadModel = entity::squad::Model;

/// A mini row, stage flags stored alongside their completion timestamps.
pub type MiniModel = entity::mini::Model;
