use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Accumulated validation failures for a single request.
///
/// Form errors concern the request as a whole, such as a malformed body. Field errors are keyed
/// by the camelCase name of the offending field.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("Validation failed: {form_errors:?} {field_errors:?}")]
pub struct ValidationError {
    pub form_errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// A validation error with a single form level message.
    pub fn form(message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.add_form(message);
        error
    }

    /// A validation error with a single message for `field`.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.add_field(field, message);
        error
    }

    pub fn add_form(&mut self, message: impl Into<String>) {
        self.form_errors.push(message.into());
    }

    pub fn add_field(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.is_empty()
    }

    /// `Ok(value)` when no errors were recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrorDto {
    fn from(error: ValidationError) -> Self {
        Self {
            error: "Validation failed".to_string(),
            form_errors: error.form_errors,
            field_errors: error.field_errors,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::BAD_REQUEST, Json(ValidationErrorDto::from(self))).into_response()
    }
}
