use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use painttracker::{
    model::{dashboard::DashboardTree, mini::ToggleStageDto, stage::Stage},
    server::controller::{
        export::{export, ExportParams},
        mini::toggle_stage,
    },
};

use super::*;
use crate::util::{body_json, body_text};

fn params(format: Option<&str>) -> Query<ExportParams> {
    Query(ExportParams {
        format: format.map(str::to_string),
    })
}

/// Expect a JSON attachment matching the dashboard tree
#[tokio::test]
async fn exports_json_attachment() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (army, _, _) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;

    let result = export(
        State(test.into_app_state()),
        test.session.clone(),
        params(Some("json")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"painttracker-export.json\""
    );

    let tree: DashboardTree = body_json(resp).await;
    assert_eq!(tree.armies[0].id, army.id);

    Ok(())
}

/// Expect unknown formats to fall back to JSON
#[tokio::test]
async fn unknown_format_exports_json() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let result = export(
        State(test.into_app_state()),
        test.session.clone(),
        params(Some("xml")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(body_text(resp).await, r#"{"armies":[]}"#);

    Ok(())
}

/// Expect only the header row for an empty collection
#[tokio::test]
async fn exports_csv_header_for_empty_collection() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let result = export(
        State(test.into_app_state()),
        test.session.clone(),
        params(Some("csv")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"painttracker-export.csv\""
    );

    let csv = body_text(resp).await;
    assert_eq!(csv.lines().count(), 1);
    assert!(csv.starts_with("armyId,armyName,squadId,squadName,miniId,miniName"));

    Ok(())
}

/// Expect painting a mini through its first three stages to export it at 60%
#[tokio::test]
async fn painted_mini_exports_at_sixty_percent() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (_, _, mini) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;
    let state = test.into_app_state();

    // The cascade of turning on Painted, one request per stage
    for stage in [Stage::Assembled, Stage::Primed, Stage::Painted] {
        let result = toggle_stage(
            State(state.clone()),
            test.session.clone(),
            Path(mini.id.to_string()),
            Ok(Json(ToggleStageDto::new(stage, true))),
        )
        .await;
        assert!(result.is_ok());
    }

    let result = export(State(state), test.session.clone(), params(Some("csv"))).await;

    assert!(result.is_ok());
    let csv = body_text(result.unwrap().into_response()).await;
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 2);

    let cells: Vec<&str> = rows[1].split(',').collect();
    assert_eq!(cells[1], r#""Orks""#);
    assert_eq!(cells[3], r#""Boyz""#);
    assert_eq!(cells[5], r#""Boy #1""#);
    assert_eq!(&cells[8..13], &["true", "true", "true", "false", "false"]);
    assert_eq!(cells[13], "60");
    assert_ne!(cells[16], r#""""#);
    assert_eq!(cells[17], r#""""#);
    assert_eq!(cells[18], r#""""#);

    Ok(())
}

/// Expect 401 for an anonymous session
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let result = export(
        State(test.into_app_state()),
        test.session.clone(),
        params(None),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
