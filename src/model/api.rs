use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request body or path fails validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorDto {
    /// Summary error message
    pub error: String,
    /// Errors not tied to a single field, such as a malformed body
    pub form_errors: Vec<String>,
    /// Error messages keyed by the field they apply to
    pub field_errors: BTreeMap<String, Vec<String>>,
}

/// The response after successfully deleting an army, squad, or mini
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DeleteDto {
    pub ok: bool,
}
