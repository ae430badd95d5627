//! Mock OAuth provider endpoints.

use mockito::Mock;

use crate::{constant, TestContext};

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Mock a successful token exchange followed by a user info lookup for `subject`.
    ///
    /// Returns both mocks, each expecting exactly one request.
    pub fn create_oauth_endpoints(&mut self, subject: &str, email: Option<&str>) -> Vec<Mock> {
        vec![
            self.create_token_endpoint(1),
            self.create_userinfo_endpoint(subject, email, 1),
        ]
    }

    pub fn create_token_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = serde_json::json!({
            "access_token": constant::TEST_ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600,
        });

        self.setup
            .server
            .mock("POST", constant::TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock the token endpoint rejecting the authorization code.
    pub fn create_token_error_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Bad Request",
        });

        self.setup
            .server
            .mock("POST", constant::TOKEN_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    pub fn create_userinfo_endpoint(
        &mut self,
        subject: &str,
        email: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({
            "sub": subject,
            "email": email,
        });

        self.setup
            .server
            .mock("GET", constant::USERINFO_PATH)
            .match_header(
                "authorization",
                format!("Bearer {}", constant::TEST_ACCESS_TOKEN).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
