use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use painttracker::{
    model::squad::{CreateSquadDto, SquadListDto, SquadResponseDto, UpdateSquadDto},
    server::controller::squad::{
        create_squad, delete_squad, list_squads, update_squad, SquadListParams,
    },
};

use super::*;
use crate::util::body_json;

/// Expect 201 with the squad placed under the army
#[tokio::test]
async fn create_returns_created_squad() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let army = test.tracker().insert_army(user_id, "Orks").await?;

    let body = CreateSquadDto {
        name: "Boyz".to_string(),
        army_id: army.id.to_string(),
    };
    let result = create_squad(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: SquadResponseDto = body_json(resp).await;
    assert_eq!(created.squad.army_id, army.id);
    assert_eq!(created.squad.name, "Boyz");

    Ok(())
}

/// Expect 404 when the parent army belongs to another user
#[tokio::test]
async fn create_not_found_for_other_users_army() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let other = test.user().insert_user("google-sub-2").await?;
    let army = test.tracker().insert_army(other.id, "Necrons").await?;
    test.sign_in("google-sub-1").await?;

    let body = CreateSquadDto {
        name: "Boyz".to_string(),
        army_id: army.id.to_string(),
    };
    let result = create_squad(
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

/// Expect 400 with a field error for a malformed army ID
#[tokio::test]
async fn create_rejects_invalid_army_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let body = CreateSquadDto {
        name: "Boyz".to_string(),
        army_id: "not-a-uuid".to_string(),
    };
    let result = create_squad(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: serde_json::Value = body_json(resp).await;
    assert!(error["fieldErrors"]["armyId"].is_array());

    Ok(())
}

/// Expect the army filter to limit the listed squads
#[tokio::test]
async fn list_filters_by_army() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let orks = test.tracker().insert_army(user_id, "Orks").await?;
    let eldar = test.tracker().insert_army(user_id, "Eldar").await?;
    let boyz = test.tracker().insert_squad(user_id, orks.id, "Boyz").await?;
    test.tracker()
        .insert_squad(user_id, eldar.id, "Guardians")
        .await?;

    let params = SquadListParams {
        army_id: Some(orks.id.to_string()),
    };
    let result = list_squads(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_ok());
    let list: SquadListDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(list.squads.len(), 1);
    assert_eq!(list.squads[0].id, boyz.id);

    Ok(())
}

/// Expect 400 for a malformed army filter
#[tokio::test]
async fn list_rejects_invalid_filter() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.sign_in("google-sub-1").await?;

    let params = SquadListParams {
        army_id: Some("orks".to_string()),
    };
    let result = list_squads(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a squad to be renamed and moved to another army
#[tokio::test]
async fn update_moves_squad() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let orks = test.tracker().insert_army(user_id, "Orks").await?;
    let goffs = test.tracker().insert_army(user_id, "Goffs").await?;
    let squad = test.tracker().insert_squad(user_id, orks.id, "Boyz").await?;

    let body = UpdateSquadDto {
        name: "Ladz".to_string(),
        army_id: Some(goffs.id.to_string()),
    };
    let result = update_squad(
        State(test.into_app_state()),
        test.session.clone(),
        Path(squad.id.to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_ok());
    let updated: SquadResponseDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(updated.squad.name, "Ladz");
    assert_eq!(updated.squad.army_id, goffs.id);

    Ok(())
}

/// Expect 404 when moving a squad to an army that does not exist
#[tokio::test]
async fn update_not_found_for_missing_target_army() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let army = test.tracker().insert_army(user_id, "Orks").await?;
    let squad = test.tracker().insert_squad(user_id, army.id, "Boyz").await?;

    let body = UpdateSquadDto {
        name: "Boyz".to_string(),
        army_id: Some(uuid::Uuid::new_v4().to_string()),
    };
    let result = update_squad(
        State(test.into_app_state()),
        test.session.clone(),
        Path(squad.id.to_string()),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a deleted squad to be gone from the list
#[tokio::test]
async fn delete_removes_squad() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (_, squad, _) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;
    let state = test.into_app_state();

    let result = delete_squad(
        State(state.clone()),
        test.session.clone(),
        Path(squad.id.to_string()),
    )
    .await;
    assert!(result.is_ok());

    let params = SquadListParams { army_id: None };
    let result = list_squads(State(state), test.session.clone(), Query(params)).await;
    let list: SquadListDto = body_json(result.unwrap().into_response()).await;
    assert!(list.squads.is_empty());

    Ok(())
}
