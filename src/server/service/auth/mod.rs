//! Authentication service layer.
//!
//! Handles the OAuth2 authorization code flow against the configured provider: building the
//! login URL and exchanging the callback code for the signed in PaintTracker user.

pub mod callback;
pub mod login;

use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RedirectUrl, TokenUrl,
};

use crate::server::{config::OAuthConfig, error::Error};

/// OAuth2 client with the authorization and token endpoints configured
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Builds the OAuth2 client for the configured provider
pub fn build_oauth_client(config: &OAuthConfig) -> Result<OAuthClient, Error> {
    let client = BasicClient::new(ClientId::new(config.client_id.clone()))
        .set_client_secret(ClientSecret::new(config.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.auth_url.clone())?)
        .set_token_uri(TokenUrl::new(config.token_url.clone())?)
        .set_redirect_uri(RedirectUrl::new(config.callback_url.clone())?);

    Ok(client)
}

/// OAuth configuration pointing at the mockito server of a test context
#[cfg(test)]
pub(crate) fn test_oauth_config(test: &painttracker_test_utils::TestContext) -> OAuthConfig {
    use painttracker_test_utils::constant;

    OAuthConfig {
        client_id: constant::TEST_CLIENT_ID.to_string(),
        client_secret: constant::TEST_CLIENT_SECRET.to_string(),
        callback_url: constant::TEST_CALLBACK_URL.to_string(),
        auth_url: test.auth_url(),
        token_url: test.token_url(),
        userinfo_url: test.userinfo_url(),
    }
}
