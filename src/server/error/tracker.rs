use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookups that found nothing owned by the current user.
///
/// Records owned by another user are reported exactly like missing ones.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Army not found")]
    ArmyNotFound,
    #[error("Squad not found")]
    SquadNotFound,
    #[error("Mini not found")]
    MiniNotFound,
    #[error("Target army not found")]
    TargetArmyNotFound,
    #[error("Target squad not found")]
    TargetSquadNotFound,
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
