use dioxus_logger::tracing;
use oauth2::{AuthorizationCode, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::server::{
    config::OAuthConfig,
    error::{auth::AuthError, Error},
    service::{auth::build_oauth_client, user::UserService},
};

/// Claims returned by the provider's user info endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
}

pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth: &'a OAuthConfig,
}

impl<'a> CallbackService<'a> {
    /// Creates a new instance of [`CallbackService`]
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth: &'a OAuthConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth,
        }
    }

    /// Exchanges the authorization code and returns the ID of the signed in user
    ///
    /// The user is created on their first login; afterwards only their email is kept in sync
    /// with the provider.
    pub async fn handle_callback(&self, code: String) -> Result<i32, Error> {
        let client = build_oauth_client(self.oauth)?;

        let token = client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await?;

        let user_info = self.fetch_user_info(token.access_token().secret()).await?;

        let user_id = UserService::new(self.db)
            .get_or_create_user(&user_info.sub, user_info.email)
            .await?;

        tracing::debug!(user_id = %user_id, "User signed in");

        Ok(user_id)
    }

    /// Fetches the user info of the access token's owner
    pub async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfo, Error> {
        let user_info = self
            .http_client
            .get(&self.oauth.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        if user_info.sub.trim().is_empty() {
            return Err(AuthError::MissingSubject.into());
        }

        Ok(user_info)
    }
}
