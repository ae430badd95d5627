use oauth2::{CsrfToken, Scope};

use crate::server::{config::OAuthConfig, error::Error, service::auth::build_oauth_client};

/// Scopes requested from the provider, enough to identify the user and read their email
pub const LOGIN_SCOPES: [&str; 2] = ["openid", "email"];

/// Provider login URL and the CSRF state it carries
pub struct Login {
    pub login_url: String,
    pub state: String,
}

/// Builds the provider login URL with a fresh random CSRF state
pub fn login_service(config: &OAuthConfig) -> Result<Login, Error> {
    let client = build_oauth_client(config)?;

    let (login_url, state) = client
        .authorize_url(CsrfToken::new_random)
        .add_scopes(
            LOGIN_SCOPES
                .into_iter()
                .map(|scope| Scope::new(scope.to_string())),
        )
        .url();

    Ok(Login {
        login_url: login_url.to_string(),
        state: state.secret().to_string(),
    })
}
