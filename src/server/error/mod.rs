//! Error types for the PaintTracker server.
//!
//! Domain errors (authentication, configuration, tracker lookups, validation) each map to their own
//! HTTP response. Library errors are wrapped into [`Error`] via `#[from]` and answered with a
//! generic 500 response while the real cause is logged.

pub mod auth;
pub mod config;
pub mod retry;
pub mod tracker;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, tracker::TrackerError, validation::ValidationError,
    },
};

/// Error returned by the OAuth2 token exchange.
pub type OAuthTokenError =
    oauth2::basic::BasicRequestTokenError<oauth2::HttpClientError<reqwest::Error>>;

/// Main error type for the PaintTracker server.
///
/// Aggregates domain errors and external library errors so handlers and services can use `?`
/// throughout. The `IntoResponse` implementation picks the HTTP status.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, unknown user).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Army, squad, or mini not found for the current user.
    #[error(transparent)]
    TrackerError(#[from] TrackerError),
    /// Request body or path failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Failed to parse a value from a string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in PaintTracker's code.
    #[error("Internal error with PaintTracker's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// JSON serialization error (export documents).
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    /// HTTP client error while talking to the OAuth provider.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// The OAuth provider rejected the authorization code exchange.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    OAuthTokenError(#[from] OAuthTokenError),
    /// An OAuth provider URL could not be parsed.
    #[error(transparent)]
    UrlParseError(#[from] oauth2::url::ParseError),
}

/// Maps domain errors to their own responses and everything else to a 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TrackerError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
