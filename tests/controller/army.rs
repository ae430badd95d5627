use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use painttracker::{
    model::army::{ArmyListDto, ArmyResponseDto, CreateArmyDto, UpdateArmyDto},
    server::controller::army::{create_army, delete_army, list_armies, update_army},
};
use sea_orm::EntityTrait;

use super::*;
use crate::util::body_json;

/// Expect 201 with the trimmed name
#[tokio::test]
async fn create_returns_created_army() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let body = CreateArmyDto {
        name: "  Orks  ".to_string(),
    };
    let result = create_army(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: ArmyResponseDto = body_json(resp).await;
    assert_eq!(created.army.name, "Orks");

    Ok(())
}

/// Expect 400 with a field error for a blank name
#[tokio::test]
async fn create_rejects_blank_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let body = CreateArmyDto {
        name: "   ".to_string(),
    };
    let result = create_army(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: serde_json::Value = body_json(resp).await;
    assert_eq!(error["fieldErrors"]["name"][0], "Name is required");

    Ok(())
}

/// Expect only the user's armies in creation order
#[tokio::test]
async fn list_returns_own_armies() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let other = test.user().insert_user("google-sub-2").await?;
    test.tracker().insert_army(other.id, "Necrons").await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let orks = test.tracker().insert_army(user_id, "Orks").await?;
    let eldar = test.tracker().insert_army(user_id, "Eldar").await?;

    let result = list_armies(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let list: ArmyListDto = body_json(result.unwrap().into_response()).await;
    let ids: Vec<_> = list.armies.iter().map(|army| army.id).collect();
    assert_eq!(ids, vec![orks.id, eldar.id]);

    Ok(())
}

/// Expect the army to be renamed
#[tokio::test]
async fn update_renames_army() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let army = test.tracker().insert_army(user_id, "Orks").await?;

    let body = UpdateArmyDto {
        name: "Goffs".to_string(),
    };
    let result = update_army(
        State(test.into_app_state()),
        test.session.clone(),
        Path(army.id.to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_ok());
    let updated: ArmyResponseDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(updated.army.id, army.id);
    assert_eq!(updated.army.name, "Goffs");

    Ok(())
}

/// Expect 404 when renaming another user's army
#[tokio::test]
async fn update_not_found_for_other_users_army() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let other = test.user().insert_user("google-sub-2").await?;
    let army = test.tracker().insert_army(other.id, "Necrons").await?;
    test.sign_in("google-sub-1").await?;

    let body = UpdateArmyDto {
        name: "Mine now".to_string(),
    };
    let result = update_army(
        State(test.into_app_state()),
        test.session.clone(),
        Path(army.id.to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for an ID that is not a UUID
#[tokio::test]
async fn update_rejects_invalid_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let body = UpdateArmyDto {
        name: "Orks".to_string(),
    };
    let result = update_army(
        State(test.into_app_state()),
        test.session.clone(),
        Path("123".to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect deleting an army to remove its squads and minis
#[tokio::test]
async fn delete_removes_descendants() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (army, squad, mini) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;

    let result = delete_army(
        State(test.into_app_state()),
        test.session.clone(),
        Path(army.id.to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let squad = entity::prelude::Squad::find_by_id(squad.id).one(&test.db).await?;
    let mini = entity::prelude::Mini::find_by_id(mini.id).one(&test.db).await?;
    assert!(squad.is_none());
    assert!(mini.is_none());

    Ok(())
}

/// Expect 404 when deleting an army that does not exist
#[tokio::test]
async fn delete_not_found_for_missing_army() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let result = delete_army(
        State(test.into_app_state()),
        test.session.clone(),
        Path(uuid::Uuid::new_v4().to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
