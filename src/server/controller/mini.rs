use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{DeleteDto, ErrorDto, ValidationErrorDto},
        mini::{CreateMiniDto, MiniListDto, MiniResponseDto, ToggleStageDto, UpdateMiniDto},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::mini::MiniService,
        util::validation::{
            json_body, optional_query_id, path_id, validate_create_mini, validate_toggle_stage,
            validate_update_mini,
        },
    },
};

pub static MINI_TAG: &str = "mini";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MiniListParams {
    /// Only list minis of this squad
    pub squad_id: Option<String>,
}

/// List the signed in user's minis
#[utoipa::path(
    get,
    path = "/api/minis",
    tag = MINI_TAG,
    params(MiniListParams),
    responses(
        (status = 200, description = "Minis in creation order", body = MiniListDto),
        (status = 400, description = "Invalid squad ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_minis(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MiniListParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let squad_id = optional_query_id("squadId", params.squad_id.as_deref())?;

    let minis = MiniService::new(&state.db).list(user_id, squad_id).await?;

    Ok(Json(MiniListDto { minis }))
}

/// Create a mini under one of the user's squads
#[utoipa::path(
    post,
    path = "/api/minis",
    tag = MINI_TAG,
    request_body = CreateMiniDto,
    responses(
        (status = 201, description = "Mini created with no stages complete", body = MiniResponseDto),
        (status = 400, description = "Invalid mini", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Squad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mini(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateMiniDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let input = validate_create_mini(&json_body(body)?)?;

    let mini = MiniService::new(&state.db).create(user_id, input).await?;

    Ok((StatusCode::CREATED, Json(MiniResponseDto { mini })))
}

/// Edit a mini, moving it to another squad when `squadId` is given
///
/// Description and tags are replaced, omitting them clears them.
#[utoipa::path(
    patch,
    path = "/api/minis/{id}",
    tag = MINI_TAG,
    params(("id" = String, Path, description = "Mini ID")),
    request_body = UpdateMiniDto,
    responses(
        (status = 200, description = "Mini updated", body = MiniResponseDto),
        (status = 400, description = "Invalid mini or ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Mini or target squad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mini(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    body: Result<Json<UpdateMiniDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let mini_id = path_id(&id)?;
    let input = validate_update_mini(&json_body(body)?)?;

    let mini = MiniService::new(&state.db)
        .update(user_id, mini_id, input)
        .await?;

    Ok(Json(MiniResponseDto { mini }))
}

/// Delete a mini
#[utoipa::path(
    delete,
    path = "/api/minis/{id}",
    tag = MINI_TAG,
    params(("id" = String, Path, description = "Mini ID")),
    responses(
        (status = 200, description = "Mini deleted", body = DeleteDto),
        (status = 400, description = "Invalid ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Mini not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mini(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let mini_id = path_id(&id)?;

    MiniService::new(&state.db).delete(user_id, mini_id).await?;

    Ok(Json(DeleteDto { ok: true }))
}

/// Set exactly one stage of a mini
///
/// Cascades to earlier or later stages are sent by the client as separate requests.
#[utoipa::path(
    post,
    path = "/api/minis/{id}/toggle-stage",
    tag = MINI_TAG,
    params(("id" = String, Path, description = "Mini ID")),
    request_body = ToggleStageDto,
    responses(
        (status = 200, description = "Stage updated", body = MiniResponseDto),
        (status = 400, description = "Invalid stage, value, or ID", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Mini not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_stage(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    body: Result<Json<ToggleStageDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let toggle = validate_toggle_stage(&id, &json_body(body)?)?;

    let mini = MiniService::new(&state.db)
        .set_stage(user_id, toggle.mini_id, toggle.stage, toggle.value)
        .await?;

    tracing::debug!(
        mini_id = %toggle.mini_id,
        stage = %toggle.stage,
        value = toggle.value,
        "Stage updated"
    );

    Ok(Json(MiniResponseDto { mini }))
}
