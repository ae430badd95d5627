//! Request validation and normalization.
//!
//! Each function records its failures into a shared [`ValidationError`] so a single response can
//! report every invalid field at once.

use axum::{extract::rejection::JsonRejection, Json};
use uuid::Uuid;

use crate::{
    model::{
        army::{CreateArmyDto, UpdateArmyDto},
        mini::{CreateMiniDto, ToggleStageDto, UpdateMiniDto},
        squad::{CreateSquadDto, UpdateSquadDto},
        stage::Stage,
    },
    server::error::validation::ValidationError,
};

pub const NAME_MAX_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 3000;
pub const TAG_MAX_CHARS: usize = 60;
pub const TAGS_MAX_COUNT: usize = 30;

/// A validated army create or update request.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmyInput {
    pub name: String,
}

/// A validated squad create or update request. `army_id` is only optional on update.
#[derive(Debug, Clone, PartialEq)]
pub struct SquadInput {
    pub name: String,
    pub army_id: Option<Uuid>,
}

/// A validated single stage update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageToggle {
    pub mini_id: Uuid,
    pub stage: Stage,
    pub value: bool,
}

/// A validated mini create or update request. `squad_id` is only optional on update.
#[derive(Debug, Clone, PartialEq)]
pub struct MiniInput {
    pub name: String,
    pub squad_id: Option<Uuid>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Unwraps a JSON body, turning a rejected body into a form level validation error.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ValidationError::form(rejection.body_text()))
}

/// Parses a UUID, recording `Invalid id` against `field` on failure.
pub fn parse_id(field: &str, value: &str, errors: &mut ValidationError) -> Option<Uuid> {
    match Uuid::parse_str(value.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add_field(field, "Invalid id");
            None
        }
    }
}

/// Parses a path id on its own.
pub fn path_id(value: &str) -> Result<Uuid, ValidationError> {
    let mut errors = ValidationError::new();
    let id = parse_id("id", value, &mut errors);

    match id {
        Some(id) => Ok(id),
        None => Err(errors),
    }
}

/// Parses an optional parent filter from the query string, blank values mean no filter.
pub fn optional_query_id(field: &str, value: Option<&str>) -> Result<Option<Uuid>, ValidationError> {
    let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    let mut errors = ValidationError::new();
    let id = parse_id(field, value, &mut errors);

    errors.into_result(id)
}

/// Trims a name and checks it is non-empty and at most [`NAME_MAX_CHARS`] characters.
pub fn validate_name(name: &str, errors: &mut ValidationError) -> String {
    let name = name.trim();
    let chars = name.chars().count();

    if chars == 0 {
        errors.add_field("name", "Name is required");
    } else if chars > NAME_MAX_CHARS {
        errors.add_field("name", "Name is too long");
    }

    name.to_string()
}

/// Trims a description, `None` when absent or blank.
pub fn normalize_description(
    description: Option<&str>,
    errors: &mut ValidationError,
) -> Option<String> {
    let description = description?.trim();

    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.add_field(
            "description",
            format!("Description must be at most {DESCRIPTION_MAX_CHARS} characters"),
        );
    }

    if description.is_empty() {
        None
    } else {
        Some(description.to_string())
    }
}

/// Trims each tag, `None` when absent or when the list is empty.
///
/// Blank tags, tags over [`TAG_MAX_CHARS`] characters, and lists over [`TAGS_MAX_COUNT`] entries
/// are rejected.
pub fn normalize_tags(tags: Option<&[String]>, errors: &mut ValidationError) -> Option<Vec<String>> {
    let tags = tags?;

    if tags.len() > TAGS_MAX_COUNT {
        errors.add_field("tags", format!("At most {TAGS_MAX_COUNT} tags are allowed"));
    }

    let tags: Vec<String> = tags.iter().map(|tag| tag.trim().to_string()).collect();

    if tags.iter().any(|tag| tag.is_empty()) {
        errors.add_field("tags", "Tags must not be empty");
    }
    if tags.iter().any(|tag| tag.chars().count() > TAG_MAX_CHARS) {
        errors.add_field(
            "tags",
            format!("Tags must be at most {TAG_MAX_CHARS} characters"),
        );
    }

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

pub fn validate_create_army(dto: &CreateArmyDto) -> Result<ArmyInput, ValidationError> {
    let mut errors = ValidationError::new();
    let name = validate_name(&dto.name, &mut errors);

    errors.into_result(ArmyInput { name })
}

pub fn validate_update_army(dto: &UpdateArmyDto) -> Result<ArmyInput, ValidationError> {
    let mut errors = ValidationError::new();
    let name = validate_name(&dto.name, &mut errors);

    errors.into_result(ArmyInput { name })
}

pub fn validate_create_squad(dto: &CreateSquadDto) -> Result<SquadInput, ValidationError> {
    let mut errors = ValidationError::new();
    let name = validate_name(&dto.name, &mut errors);
    let army_id = parse_id("armyId", &dto.army_id, &mut errors);

    errors.into_result(SquadInput { name, army_id })
}

pub fn validate_update_squad(dto: &UpdateSquadDto) -> Result<SquadInput, ValidationError> {
    let mut errors = ValidationError::new();
    let name = validate_name(&dto.name, &mut errors);
    let army_id = dto
        .army_id
        .as_deref()
        .and_then(|army_id| parse_id("armyId", army_id, &mut errors));

    errors.into_result(SquadInput { name, army_id })
}

pub fn validate_create_mini(dto: &CreateMiniDto) -> Result<MiniInput, ValidationError> {
    let mut errors = ValidationError::new();
    let name = validate_name(&dto.name, &mut errors);
    let squad_id = parse_id("squadId", &dto.squad_id, &mut errors);
    let description = normalize_description(dto.description.as_deref(), &mut errors);
    let tags = normalize_tags(dto.tags.as_deref(), &mut errors);

    errors.into_result(MiniInput {
        name,
        squad_id,
        description,
        tags,
    })
}

pub fn validate_update_mini(dto: &UpdateMiniDto) -> Result<MiniInput, ValidationError> {
    let mut errors = ValidationError::new();
    let name = validate_name(&dto.name, &mut errors);
    let squad_id = dto
        .squad_id
        .as_deref()
        .and_then(|squad_id| parse_id("squadId", squad_id, &mut errors));
    let description = normalize_description(dto.description.as_deref(), &mut errors);
    let tags = normalize_tags(dto.tags.as_deref(), &mut errors);

    errors.into_result(MiniInput {
        name,
        squad_id,
        description,
        tags,
    })
}

pub fn validate_toggle_stage(id: &str, dto: &ToggleStageDto) -> Result<StageToggle, ValidationError> {
    let mut errors = ValidationError::new();
    let mini_id = parse_id("id", id, &mut errors);
    let stage = match dto.stage.parse::<Stage>() {
        Ok(stage) => Some(stage),
        Err(_) => {
            errors.add_field("stage", "Invalid stage");
            None
        }
    };

    match (mini_id, stage) {
        (Some(mini_id), Some(stage)) => errors.into_result(StageToggle {
            mini_id,
            stage,
            value: dto.value,
        }),
        _ => Err(errors),
    }
}
