use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{DeleteDto, ErrorDto, ValidationErrorDto},
        squad::{CreateSquadDto, SquadListDto, SquadResponseDto, UpdateSquadDto},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::squad::SquadService,
        util::validation::{
            json_body, optional_query_id, path_id, validate_create_squad, validate_update_squad,
        },
    },
};

pub static SQUAD_TAG: &str = "squad";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SquadListParams {
    /// Only list squads of this army
    pub army_id: Option<String>,
}

/// List the signed in user's squads
#[utoipa::path(
    get,
    path = "/api/squads",
    tag = SQUAD_TAG,
    params(SquadListParams),
    responses(
        (status = 200, description = "Squads in creation order", body = SquadListDto),
        (status = 400, description = "Invalid army ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_squads(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SquadListParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let army_id = optional_query_id("armyId", params.army_id.as_deref())?;

    let squads = SquadService::new(&state.db).list(user_id, army_id).await?;

    Ok(Json(SquadListDto { squads }))
}

/// Create a squad under one of the user's armies
#[utoipa::path(
    post,
    path = "/api/squads",
    tag = SQUAD_TAG,
    request_body = CreateSquadDto,
    responses(
        (status = 201, description = "Squad created", body = SquadResponseDto),
        (status = 400, description = "Invalid squad", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Army not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_squad(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateSquadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let input = validate_create_squad(&json_body(body)?)?;

    let squad = SquadService::new(&state.db).create(user_id, input).await?;

    Ok((StatusCode::CREATED, Json(SquadResponseDto { squad })))
}

/// Rename a squad, moving it to another army when `armyId` is given
#[utoipa::path(
    patch,
    path = "/api/squads/{id}",
    tag = SQUAD_TAG,
    params(("id" = String, Path, description = "Squad ID")),
    request_body = UpdateSquadDto,
    responses(
        (status = 200, description = "Squad updated", body = SquadResponseDto),
        (status = 400, description = "Invalid squad or ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Squad or target army not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_squad(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    body: Result<Json<UpdateSquadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let squad_id = path_id(&id)?;
    let input = validate_update_squad(&json_body(body)?)?;

    let squad = SquadService::new(&state.db)
        .update(user_id, squad_id, input)
        .await?;

    Ok(Json(SquadResponseDto { squad }))
}

/// Delete a squad along with its minis
#[utoipa::path(
    delete,
    path = "/api/squads/{id}",
    tag = SQUAD_TAG,
    params(("id" = String, Path, description = "Squad ID")),
    responses(
        (status = 200, description = "Squad deleted", body = DeleteDto),
        (status = 400, description = "Invalid ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Squad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_squad(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let squad_id = path_id(&id)?;

    SquadService::new(&state.db).delete(user_id, squad_id).await?;

    Ok(Json(DeleteDto { ok: true }))
}
