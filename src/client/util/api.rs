//! Calls to the PaintTracker API.
//!
//! Requests are only sent from the browser, other builds answer every call with an error.

use std::{collections::BTreeMap, fmt};

use painttracker::model::{
    api::DeleteDto,
    army::{ArmyResponseDto, CreateArmyDto, UpdateArmyDto},
    dashboard::DashboardTree,
    mini::{CreateMiniDto, MiniResponseDto, ToggleStageDto, UpdateMiniDto},
    squad::{CreateSquadDto, SquadResponseDto, UpdateSquadDto},
    stage::Stage,
    user::UserDto,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// A failed API call, `status` is `None` when no response was received
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "Request failed with status {}: {}", status, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Error body of any failed request, validation details are optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub form_errors: Vec<String>,
    #[serde(default)]
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ErrorBody {
    /// The most specific message of the body, e.g. `name: Name is required`
    pub fn message(&self) -> String {
        if let Some(form_error) = self.form_errors.first() {
            return form_error.clone();
        }

        if let Some((field, errors)) = self
            .field_errors
            .iter()
            .find(|(_, errors)| !errors.is_empty())
        {
            return format!("{}: {}", field, errors[0]);
        }

        self.error.clone()
    }
}

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[cfg(feature = "web")]
async fn request<B: Serialize, T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: Option<&B>,
) -> Result<T, ApiError> {
    use reqwasm::http::{Method as HttpMethod, Request, RequestCredentials};

    let http_method = match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    };

    let mut request = Request::new(url)
        .method(http_method)
        .credentials(RequestCredentials::Include);

    if let Some(body) = body {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::transport(format!("Failed to encode request: {}", e)))?;
        request = request.header("Content-Type", "application/json").body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))?;

    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)));
    }

    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message(),
        Err(_) => "Request failed".to_string(),
    };

    Err(ApiError {
        status: Some(status),
        message,
    })
}

#[cfg(not(feature = "web"))]
async fn request<B: Serialize, T: DeserializeOwned>(
    _method: Method,
    url: &str,
    _body: Option<&B>,
) -> Result<T, ApiError> {
    Err(ApiError::transport(format!(
        "Cannot request {} outside of the browser",
        url
    )))
}

/// The signed in user, `None` when signed out
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    match request::<(), UserDto>(Method::Get, "/api/auth/user", None).await {
        Ok(user) => Ok(Some(user)),
        Err(ApiError {
            status: Some(401), ..
        }) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn get_dashboard() -> Result<DashboardTree, ApiError> {
    request::<(), _>(Method::Get, "/api/dashboard", None).await
}

pub async fn create_army(body: &CreateArmyDto) -> Result<ArmyResponseDto, ApiError> {
    request(Method::Post, "/api/armies", Some(body)).await
}

pub async fn update_army(id: Uuid, body: &UpdateArmyDto) -> Result<ArmyResponseDto, ApiError> {
    request(Method::Patch, &format!("/api/armies/{}", id), Some(body)).await
}

pub async fn create_squad(body: &CreateSquadDto) -> Result<SquadResponseDto, ApiError> {
    request(Method::Post, "/api/squads", Some(body)).await
}

pub async fn update_squad(id: Uuid, body: &UpdateSquadDto) -> Result<SquadResponseDto, ApiError> {
    request(Method::Patch, &format!("/api/squads/{}", id), Some(body)).await
}

pub async fn create_mini(body: &CreateMiniDto) -> Result<MiniResponseDto, ApiError> {
    request(Method::Post, "/api/minis", Some(body)).await
}

pub async fn update_mini(id: Uuid, body: &UpdateMiniDto) -> Result<MiniResponseDto, ApiError> {
    request(Method::Patch, &format!("/api/minis/{}", id), Some(body)).await
}

/// Sets exactly one stage of a mini
pub async fn toggle_stage(
    id: Uuid,
    stage: Stage,
    value: bool,
) -> Result<MiniResponseDto, ApiError> {
    request(
        Method::Post,
        &format!("/api/minis/{}/toggle-stage", id),
        Some(&ToggleStageDto::new(stage, value)),
    )
    .await
}

/// Which kind of record a delete targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Army,
    Squad,
    Mini,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Army => "army",
            RecordKind::Squad => "squad",
            RecordKind::Mini => "mini",
        }
    }

    fn base_path(self) -> &'static str {
        match self {
            RecordKind::Army => "/api/armies",
            RecordKind::Squad => "/api/squads",
            RecordKind::Mini => "/api/minis",
        }
    }
}

pub async fn delete(kind: RecordKind, id: Uuid) -> Result<DeleteDto, ApiError> {
    request::<(), _>(
        Method::Delete,
        &format!("{}/{}", kind.base_path(), id),
        None,
    )
    .await
}
