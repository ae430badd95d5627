//! Conversions from database models into API DTOs.

use crate::{
    model::{
        army::ArmyDto,
        dashboard::{ArmyNode, SquadNode},
        mini::MiniDto,
        squad::SquadDto,
        user::UserDto,
    },
    server::{
        model::db::{ArmyModel, MiniModel, SquadModel, UserModel},
        util::time::to_utc,
    },
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

impl From<ArmyModel> for ArmyDto {
    fn from(army: ArmyModel) -> Self {
        Self {
            id: army.id,
            name: army.name,
            created_at: to_utc(army.created_at),
            updated_at: to_utc(army.updated_at),
        }
    }
}

impl From<SquadModel> for SquadDto {
    fn from(squad: SquadModel) -> Self {
        Self {
            id: squad.id,
            army_id: squad.army_id,
            name: squad.name,
            created_at: to_utc(squad.created_at),
            updated_at: to_utc(squad.updated_at),
        }
    }
}

impl From<MiniModel> for MiniDto {
    fn from(mini: MiniModel) -> Self {
        // Anything other than an array of strings is treated as no tags
        let tags = mini
            .tags
            .and_then(|tags| serde_json::from_value::<Vec<String>>(tags).ok());

        Self {
            id: mini.id,
            squad_id: mini.squad_id,
            name: mini.name,
            description: mini.description,
            tags,
            assembled: mini.assembled,
            primed: mini.primed,
            painted: mini.painted,
            based: mini.based,
            photographed: mini.photographed,
            assembled_at: mini.assembled_at.map(to_utc),
            primed_at: mini.primed_at.map(to_utc),
            painted_at: mini.painted_at.map(to_utc),
            based_at: mini.based_at.map(to_utc),
            photographed_at: mini.photographed_at.map(to_utc),
            created_at: to_utc(mini.created_at),
            updated_at: to_utc(mini.updated_at),
        }
    }
}

impl ArmyNode {
    pub fn from_model(army: ArmyModel, squads: Vec<SquadNode>) -> Self {
        Self {
            id: army.id,
            name: army.name,
            created_at: to_utc(army.created_at),
            updated_at: to_utc(army.updated_at),
            squads,
        }
    }
}

impl SquadNode {
    pub fn from_model(squad: SquadModel, minis: Vec<MiniModel>) -> Self {
        Self {
            id: squad.id,
            army_id: squad.army_id,
            name: squad.name,
            created_at: to_utc(squad.created_at),
            updated_at: to_utc(squad.updated_at),
            minis: minis.into_iter().map(MiniDto::from).collect(),
        }
    }
}
