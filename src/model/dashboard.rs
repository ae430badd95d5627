//! The full army → squad → mini hierarchy of a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::mini::MiniDto;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardTree {
    pub armies: Vec<ArmyNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ArmyNode {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub squads: Vec<SquadNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SquadNode {
    pub id: Uuid,
    pub army_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub minis: Vec<MiniDto>,
}

impl DashboardTree {
    /// Every mini of every squad of every army, in display order.
    pub fn minis(&self) -> impl Iterator<Item = &MiniDto> {
        self.armies.iter().flat_map(|army| army.minis())
    }

    pub fn find_mini(&self, mini_id: Uuid) -> Option<&MiniDto> {
        self.minis().find(|mini| mini.id == mini_id)
    }

    pub fn find_mini_mut(&mut self, mini_id: Uuid) -> Option<&mut MiniDto> {
        self.armies
            .iter_mut()
            .flat_map(|army| army.squads.iter_mut())
            .flat_map(|squad| squad.minis.iter_mut())
            .find(|mini| mini.id == mini_id)
    }
}

impl ArmyNode {
    pub fn minis(&self) -> impl Iterator<Item = &MiniDto> {
        self.squads.iter().flat_map(|squad| squad.minis.iter())
    }
}
