//! Placeholder OAuth settings used by every test context. None of these are real credentials.

pub static TEST_CLIENT_ID: &str = "oauth_client_id";

pub static TEST_CLIENT_SECRET: &str = "oauth_client_secret";

pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// Access token returned by the mock token endpoint.
pub static TEST_ACCESS_TOKEN: &str = "test_access_token";

/// Path of the mock authorization endpoint on the mockito server.
pub static AUTH_PATH: &str = "/authorize";

/// Path of the mock token endpoint on the mockito server.
pub static TOKEN_PATH: &str = "/token";

/// Path of the mock user info endpoint on the mockito server.
pub static USERINFO_PATH: &str = "/userinfo";
