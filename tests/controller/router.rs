//! Requests sent through the full router with a memory session store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use painttracker::server::router::routes;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use super::*;
use crate::util::{body_json, body_text};

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.into_app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

/// Expect API routes to answer 401 with an error body without a session cookie
#[tokio::test]
async fn api_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::post("/api/armies")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"Orks"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let error: serde_json::Value = body_json(resp).await;
    assert_eq!(error["error"], "Unauthorized");

    Ok(())
}

/// Expect the OpenAPI document to list the stage toggle route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let document = body_text(resp).await;
    assert!(document.contains("/api/minis/{id}/toggle-stage"));
    assert!(document.contains("/api/export"));

    Ok(())
}
