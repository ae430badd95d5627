use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::stage::Stage;

/// A single tracked miniature with its five stage flags and their timestamps.
///
/// A stage flag is `true` exactly when its paired `*_at` timestamp is set. Use
/// [`MiniDto::set_stage`] to change both together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MiniDto {
    pub id: Uuid,
    pub squad_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub assembled: bool,
    pub primed: bool,
    pub painted: bool,
    pub based: bool,
    pub photographed: bool,
    pub assembled_at: Option<DateTime<Utc>>,
    pub primed_at: Option<DateTime<Utc>>,
    pub painted_at: Option<DateTime<Utc>>,
    pub based_at: Option<DateTime<Utc>>,
    pub photographed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MiniDto {
    /// Whether the given stage is complete.
    pub fn stage(&self, stage: Stage) -> bool {
        match stage {
            Stage::Assembled => self.assembled,
            Stage::Primed => self.primed,
            Stage::Painted => self.painted,
            Stage::Based => self.based,
            Stage::Photographed => self.photographed,
        }
    }

    /// When the given stage was completed, if it is.
    pub fn stage_at(&self, stage: Stage) -> Option<DateTime<Utc>> {
        match stage {
            Stage::Assembled => self.assembled_at,
            Stage::Primed => self.primed_at,
            Stage::Painted => self.painted_at,
            Stage::Based => self.based_at,
            Stage::Photographed => self.photographed_at,
        }
    }

    /// Sets a stage flag together with its timestamp.
    ///
    /// The flag is derived from the timestamp so the pair can never disagree.
    pub fn set_stage(&mut self, stage: Stage, completed_at: Option<DateTime<Utc>>) {
        let done = completed_at.is_some();
        let (flag, at) = match stage {
            Stage::Assembled => (&mut self.assembled, &mut self.assembled_at),
            Stage::Primed => (&mut self.primed, &mut self.primed_at),
            Stage::Painted => (&mut self.painted, &mut self.painted_at),
            Stage::Based => (&mut self.based, &mut self.based_at),
            Stage::Photographed => (&mut self.photographed, &mut self.photographed_at),
        };

        *flag = done;
        *at = completed_at;
    }
}

/// Request body to create a new mini under a squad
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateMiniDto {
    pub name: String,
    pub squad_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Request body to edit a mini and optionally move it to another squad
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateMiniDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squad_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Request body to set a single stage of a mini
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ToggleStageDto {
    /// Stage key, e.g. `"painted"`
    pub stage: String,
    pub value: bool,
}

impl ToggleStageDto {
    pub fn new(stage: Stage, value: bool) -> Self {
        Self {
            stage: stage.key().to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MiniResponseDto {
    pub mini: MiniDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MiniListDto {
    pub minis: Vec<MiniDto>,
}
