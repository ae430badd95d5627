//! Helpers for calling controllers directly with state built from a test context.

use axum::{body::to_bytes, response::Response};
use painttracker::server::{
    config::OAuthConfig,
    model::{
        app::{build_http_client, AppState},
        session::user::SessionUserId,
    },
};
use painttracker_test_utils::{constant, TestContext, TestError};
use serde::de::DeserializeOwned;

#[allow(async_fn_in_trait)]
pub trait TestContextExt {
    /// Application state sharing the test database and pointing OAuth at the mockito server
    fn into_app_state(&self) -> AppState;

    /// Insert a user and store their ID in the session
    async fn sign_in(&mut self, subject: &str) -> Result<i32, TestError>;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            oauth: OAuthConfig {
                client_id: constant::TEST_CLIENT_ID.to_string(),
                client_secret: constant::TEST_CLIENT_SECRET.to_string(),
                callback_url: constant::TEST_CALLBACK_URL.to_string(),
                auth_url: self.auth_url(),
                token_url: self.token_url(),
                userinfo_url: self.userinfo_url(),
            },
            http_client: build_http_client().expect("Failed to build HTTP client"),
        }
    }

    async fn sign_in(&mut self, subject: &str) -> Result<i32, TestError> {
        let user = self.user().insert_user(subject).await?;

        SessionUserId::insert(&self.session, user.id)
            .await
            .expect("Failed to insert user ID into session");

        Ok(user.id)
    }
}

pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    serde_json::from_str(&body_text(resp).await).expect("Failed to parse response body")
}
