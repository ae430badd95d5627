use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::export::{ExportFormat, ExportService},
    },
};

pub static EXPORT_TAG: &str = "export";

#[derive(Deserialize, IntoParams)]
pub struct ExportParams {
    /// `json` or `csv`, anything else exports JSON
    pub format: Option<String>,
}

/// Download the signed in user's collection as JSON or CSV
#[utoipa::path(
    get,
    path = "/api/export",
    tag = EXPORT_TAG,
    params(ExportParams),
    responses(
        (status = 200, description = "Export attachment", content(
            (String = "application/json"),
            (String = "text/csv")
        )),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;
    let format = ExportFormat::from_query(params.format.as_deref());

    let file = ExportService::new(&state.db).export(user_id, format).await?;

    let headers = [
        (header::CONTENT_TYPE, file.format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.format.filename()),
        ),
    ];

    Ok((headers, file.body))
}
