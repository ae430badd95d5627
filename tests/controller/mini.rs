use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use painttracker::{
    model::{
        mini::{CreateMiniDto, MiniListDto, MiniResponseDto, ToggleStageDto, UpdateMiniDto},
        stage::Stage,
    },
    server::controller::mini::{
        create_mini, delete_mini, list_minis, toggle_stage, update_mini, MiniListParams,
    },
};

use super::*;
use crate::util::body_json;

/// Expect 201 with every stage incomplete and the details trimmed
#[tokio::test]
async fn create_returns_created_mini() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let army = test.tracker().insert_army(user_id, "Orks").await?;
    let squad = test.tracker().insert_squad(user_id, army.id, "Boyz").await?;

    let body = CreateMiniDto {
        name: "Boy #1".to_string(),
        squad_id: squad.id.to_string(),
        description: Some("  Big choppa  ".to_string()),
        tags: Some(vec![" goff ".to_string(), "choppa".to_string()]),
    };
    let result = create_mini(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: MiniResponseDto = body_json(resp).await;
    let mini = created.mini;
    assert_eq!(mini.squad_id, squad.id);
    assert_eq!(mini.description.as_deref(), Some("Big choppa"));
    assert_eq!(
        mini.tags,
        Some(vec!["goff".to_string(), "choppa".to_string()])
    );
    for stage in Stage::ALL {
        assert!(!mini.stage(stage));
        assert!(mini.stage_at(stage).is_none());
    }

    Ok(())
}

/// Expect 404 when the squad does not exist
#[tokio::test]
async fn create_not_found_for_missing_squad() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let body = CreateMiniDto {
        name: "Boy #1".to_string(),
        squad_id: uuid::Uuid::new_v4().to_string(),
        ..Default::default()
    };
    let result = create_mini(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 listing both the name and squad errors
#[tokio::test]
async fn create_reports_every_field_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let body = CreateMiniDto {
        name: "".to_string(),
        squad_id: "".to_string(),
        ..Default::default()
    };
    let result = create_mini(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: serde_json::Value = body_json(resp).await;
    assert!(error["fieldErrors"]["name"].is_array());
    assert!(error["fieldErrors"]["squadId"].is_array());

    Ok(())
}

/// Expect the squad filter to limit the listed minis
#[tokio::test]
async fn list_filters_by_squad() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (army, boyz, boy) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;
    let nobz = test.tracker().insert_squad(user_id, army.id, "Nobz").await?;
    test.tracker().insert_mini(user_id, nobz.id, "Nob #1").await?;

    let params = MiniListParams {
        squad_id: Some(boyz.id.to_string()),
    };
    let result = list_minis(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_ok());
    let list: MiniListDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(list.minis.len(), 1);
    assert_eq!(list.minis[0].id, boy.id);

    Ok(())
}

/// Expect edits to replace the description and tags, and to move the mini
#[tokio::test]
async fn update_replaces_details() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (army, _, _) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;
    let nobz = test.tracker().insert_squad(user_id, army.id, "Nobz").await?;
    let boyz = test.tracker().insert_squad(user_id, army.id, "More Boyz").await?;
    let mini = test
        .tracker()
        .insert_mini_with_details(user_id, boyz.id, "Boy #2", Some("Old"), Some(vec!["goff"]))
        .await?;

    let body = UpdateMiniDto {
        name: "Nob #1".to_string(),
        squad_id: Some(nobz.id.to_string()),
        description: None,
        tags: None,
    };
    let result = update_mini(
        State(test.into_app_state()),
        test.session.clone(),
        Path(mini.id.to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_ok());
    let updated: MiniResponseDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(updated.mini.name, "Nob #1");
    assert_eq!(updated.mini.squad_id, nobz.id);
    assert!(updated.mini.description.is_none());
    assert!(updated.mini.tags.is_none());

    Ok(())
}

/// Expect exactly the requested stage to change, with a completion timestamp
#[tokio::test]
async fn toggle_sets_single_stage() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (_, _, mini) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;

    let body = ToggleStageDto::new(Stage::Painted, true);
    let result = toggle_stage(
        State(test.into_app_state()),
        test.session.clone(),
        Path(mini.id.to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_ok());
    let toggled: MiniResponseDto = body_json(result.unwrap().into_response()).await;
    assert!(toggled.mini.painted);
    assert!(toggled.mini.painted_at.is_some());
    assert!(!toggled.mini.assembled);
    assert!(!toggled.mini.primed);
    assert!(toggled.mini.primed_at.is_none());

    Ok(())
}

/// Expect turning a stage off to clear its timestamp
#[tokio::test]
async fn toggle_off_clears_timestamp() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (_, _, mini) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;
    let state = test.into_app_state();

    for value in [true, false] {
        let body = ToggleStageDto::new(Stage::Primed, value);
        let result = toggle_stage(
            State(state.clone()),
            test.session.clone(),
            Path(mini.id.to_string()),
            Ok(Json(body)),
        )
        .await;
        assert!(result.is_ok());
    }

    let params = MiniListParams { squad_id: None };
    let result = list_minis(State(state), test.session.clone(), Query(params)).await;
    let list: MiniListDto = body_json(result.unwrap().into_response()).await;
    assert!(!list.minis[0].primed);
    assert!(list.minis[0].primed_at.is_none());

    Ok(())
}

/// Expect an unknown stage key to be reported on the stage field and leave the mini unchanged
#[tokio::test]
async fn toggle_rejects_unknown_stage() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (_, _, mini) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;
    let state = test.into_app_state();

    let body = ToggleStageDto {
        stage: "varnished".to_string(),
        value: true,
    };
    let result = toggle_stage(
        State(state.clone()),
        test.session.clone(),
        Path(mini.id.to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: serde_json::Value = body_json(resp).await;
    assert_eq!(error["fieldErrors"]["stage"][0], "Invalid stage");
    assert_eq!(error["formErrors"], serde_json::json!([]));

    let params = MiniListParams { squad_id: None };
    let result = list_minis(State(state), test.session.clone(), Query(params)).await;
    let list: MiniListDto = body_json(result.unwrap().into_response()).await;
    assert!(Stage::ALL.into_iter().all(|stage| !list.minis[0].stage(stage)));

    Ok(())
}

/// Expect 404 when toggling another user's mini
#[tokio::test]
async fn toggle_not_found_for_other_users_mini() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let other = test.user().insert_user("google-sub-2").await?;
    let (_, _, mini) = test
        .tracker()
        .insert_hierarchy(other.id, "Necrons", "Warriors", "Warrior #1")
        .await?;
    test.sign_in("google-sub-1").await?;

    let body = ToggleStageDto::new(Stage::Assembled, true);
    let result = toggle_stage(
        State(test.into_app_state()),
        test.session.clone(),
        Path(mini.id.to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 before anything else for an anonymous session
#[tokio::test]
async fn toggle_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let body = ToggleStageDto::new(Stage::Assembled, true);
    let result = toggle_stage(
        State(test.into_app_state()),
        test.session.clone(),
        Path(uuid::Uuid::new_v4().to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 when deleting the same mini twice
#[tokio::test]
async fn delete_twice_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (_, _, mini) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;
    let state = test.into_app_state();

    let first = delete_mini(
        State(state.clone()),
        test.session.clone(),
        Path(mini.id.to_string()),
    )
    .await;
    let second = delete_mini(State(state), test.session.clone(), Path(mini.id.to_string())).await;

    assert!(first.is_ok());
    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
