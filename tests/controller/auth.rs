use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use painttracker::{
    model::user::UserDto,
    server::{
        controller::auth::{callback, get_user, login, logout, CallbackParams},
        model::session::{auth::SessionAuthCsrf, user::SessionUserId},
    },
};

use super::*;
use crate::util::body_json;

fn location(resp: &axum::response::Response) -> String {
    resp.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

/// Expect a redirect to the provider carrying the CSRF state stored in session
#[tokio::test]
async fn login_redirects_to_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let csrf = SessionAuthCsrf::get(&test.session).await.unwrap();
    let location = location(&resp);
    assert!(location.starts_with(&test.auth_url()));
    assert!(location.contains(&format!("state={}", csrf)));

    Ok(())
}

/// Expect a first login to create the user, sign them in, and redirect to the dashboard
#[tokio::test]
async fn callback_signs_in_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_oauth_endpoints("google-sub-1", Some("warboss@example.com"))
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "csrf_state")
        .await
        .unwrap();

    let params = CallbackParams {
        state: "csrf_state".to_string(),
        code: "auth_code".to_string(),
    };
    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/dashboard");

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(user_id.is_some());
    test.assert_mocks();

    Ok(())
}

/// Expect 400 without calling the provider when the CSRF state does not match
#[tokio::test]
async fn callback_rejects_csrf_mismatch() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let token = test.auth().create_token_endpoint(0);
    SessionAuthCsrf::insert(&test.session, "csrf_state")
        .await
        .unwrap();

    let params = CallbackParams {
        state: "forged_state".to_string(),
        code: "auth_code".to_string(),
    };
    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());
    token.assert();

    Ok(())
}

/// Expect 500 when the provider rejects the authorization code
#[tokio::test]
async fn callback_fails_for_rejected_code() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let token = test.auth().create_token_error_endpoint(1);
    SessionAuthCsrf::insert(&test.session, "csrf_state")
        .await
        .unwrap();

    let params = CallbackParams {
        state: "csrf_state".to_string(),
        code: "bad_code".to_string(),
    };
    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    token.assert();

    Ok(())
}

/// Expect logout to clear the session and redirect home
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect logout of an anonymous session to still redirect
#[tokio::test]
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}

/// Expect the signed in user
#[tokio::test]
async fn get_user_returns_signed_in_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.id, user_id);

    Ok(())
}

/// Expect 401 for an anonymous session
#[tokio::test]
async fn get_user_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 and a cleared session when the session user no longer exists
#[tokio::test]
async fn get_user_clears_session_of_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    SessionUserId::insert(&test.session, 999).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}
