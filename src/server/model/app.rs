use sea_orm::DatabaseConnection;

use crate::server::config::OAuthConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub oauth: OAuthConfig,
    /// Client used for the OAuth token exchange and user info requests.
    pub http_client: reqwest::Client,
}

/// Builds the HTTP client used to talk to the OAuth provider.
///
/// Redirects are disabled so the token endpoint cannot bounce the exchange elsewhere.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
}
