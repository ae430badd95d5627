//! Database model type aliases matching those of the main crate.

pub type UserModel = entity::painttracker_user::Model;

pub type ArmyModel = entity::army::Model;

pub type SquadModel = entity::squad::Model;

pub type MiniModel = entity::mini::Model;
