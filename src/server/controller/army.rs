use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DeleteDto, ErrorDto, ValidationErrorDto},
        army::{ArmyListDto, ArmyResponseDto, CreateArmyDto, UpdateArmyDto},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::army::ArmyService,
        util::validation::{json_body, path_id, validate_create_army, validate_update_army},
    },
};

pub static ARMY_TAG: &str = "army";

/// List the signed in user's armies
#[utoipa::path(
    get,
    path = "/api/armies",
    tag = ARMY_TAG,
    responses(
        (status = 200, description = "Armies in creation order", body = ArmyListDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_armies(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let armies = ArmyService::new(&state.db).list(user_id).await?;

    Ok(Json(ArmyListDto { armies }))
}

/// Create an army
#[utoipa::path(
    post,
    path = "/api/armies",
    tag = ARMY_TAG,
    request_body = CreateArmyDto,
    responses(
        (status = 201, description = "Army created", body = ArmyResponseDto),
        (status = 400, description = "Invalid army", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_army(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateArmyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let input = validate_create_army(&json_body(body)?)?;

    let army = ArmyService::new(&state.db).create(user_id, input).await?;

    Ok((StatusCode::CREATED, Json(ArmyResponseDto { army })))
}

/// Rename an army
#[utoipa::path(
    patch,
    path = "/api/armies/{id}",
    tag = ARMY_TAG,
    params(("id" = String, Path, description = "Army ID")),
    request_body = UpdateArmyDto,
    responses(
        (status = 200, description = "Army renamed", body = ArmyResponseDto),
        (status = 400, description = "Invalid army or ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Army not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_army(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    body: Result<Json<UpdateArmyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let army_id = path_id(&id)?;
    let input = validate_update_army(&json_body(body)?)?;

    let army = ArmyService::new(&state.db)
        .update(user_id, army_id, input)
        .await?;

    Ok(Json(ArmyResponseDto { army }))
}

/// Delete an army along with its squads and minis
#[utoipa::path(
    delete,
    path = "/api/armies/{id}",
    tag = ARMY_TAG,
    params(("id" = String, Path, description = "Army ID")),
    responses(
        (status = 200, description = "Army deleted", body = DeleteDto),
        (status = 400, description = "Invalid ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Army not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_army(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let army_id = path_id(&id)?;

    ArmyService::new(&state.db).delete(user_id, army_id).await?;

    Ok(Json(DeleteDto { ok: true }))
}
