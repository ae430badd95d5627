use crate::server::error::config::ConfigError;

pub const DEFAULT_OAUTH_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_OAUTH_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// OAuth2 provider settings used for the authorization code login flow.
#[derive(Clone, Debug)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub oauth: OAuthConfig,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Reads the configuration using `lookup` to resolve each variable.
    ///
    /// Empty values are treated as missing.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let required = |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let url = |name: &str, default: Option<&str>| -> Result<String, ConfigError> {
            let value = match (get(name), default) {
                (Some(value), _) => value,
                (None, Some(default)) => default.to_string(),
                (None, None) => return Err(ConfigError::MissingEnvVar(name.to_string())),
            };

            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidEnvValue {
                    var: name.to_string(),
                    reason: format!("expected an http(s) URL, got {value:?}"),
                });
            }

            Ok(value)
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            oauth: OAuthConfig {
                client_id: required("OAUTH_CLIENT_ID")?,
                client_secret: required("OAUTH_CLIENT_SECRET")?,
                callback_url: url("OAUTH_CALLBACK_URL", None)?,
                auth_url: url("OAUTH_AUTH_URL", Some(DEFAULT_OAUTH_AUTH_URL))?,
                token_url: url("OAUTH_TOKEN_URL", Some(DEFAULT_OAUTH_TOKEN_URL))?,
                userinfo_url: url("OAUTH_USERINFO_URL", Some(DEFAULT_OAUTH_USERINFO_URL))?,
            },
        })
    }
}
