//! Login CSRF state kept in the session between `/api/auth/login` and the OAuth callback.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_AUTH_CSRF_KEY: &str = "painttracker:auth:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Stores the CSRF state generated for a login attempt, replacing any earlier one.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Returns the stored CSRF state without consuming it.
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Consumes the stored CSRF state so it can only be checked once.
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use painttracker_test_utils::prelude::*;

    use crate::server::{
        error::{auth::AuthError, Error},
        model::session::auth::SessionAuthCsrf,
    };

    /// Expect the latest inserted state to be returned
    #[tokio::test]
    async fn returns_latest_inserted_state() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        SessionAuthCsrf::insert(&test.session, "first").await.unwrap();
        SessionAuthCsrf::insert(&test.session, "second").await.unwrap();

        let state = SessionAuthCsrf::get(&test.session).await.unwrap();
        assert_eq!(state, "second");

        Ok(())
    }

    /// Expect CsrfMissingValue when no login was started
    #[tokio::test]
    async fn fails_when_state_missing() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = SessionAuthCsrf::get(&test.session).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::CsrfMissingValue))
        ));

        Ok(())
    }

    /// Expect remove to consume the state so a second callback cannot reuse it
    #[tokio::test]
    async fn remove_consumes_state() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

        let first = SessionAuthCsrf::remove(&test.session).await;
        let second = SessionAuthCsrf::remove(&test.session).await;

        assert_eq!(first.unwrap(), "state");
        assert!(matches!(
            second,
            Err(Error::AuthError(AuthError::CsrfMissingValue))
        ));

        Ok(())
    }
}
