use axum::{extract::State, http::StatusCode, response::IntoResponse};
use painttracker::{model::dashboard::DashboardTree, server::controller::dashboard::get_dashboard};

use super::*;
use crate::util::body_json;

/// Expect the user's hierarchy nested in creation order
#[tokio::test]
async fn returns_nested_tree() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = test.sign_in("google-sub-1").await?;
    let (orks, boyz, boy) = test
        .tracker()
        .insert_hierarchy(user_id, "Orks", "Boyz", "Boy #1")
        .await?;
    let nobz = test.tracker().insert_squad(user_id, orks.id, "Nobz").await?;
    let marines = test.tracker().insert_army(user_id, "Space Marines").await?;

    let result = get_dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let tree: DashboardTree = body_json(resp).await;
    assert_eq!(tree.armies.len(), 2);
    assert_eq!(tree.armies[0].id, orks.id);
    assert_eq!(tree.armies[1].id, marines.id);
    assert!(tree.armies[1].squads.is_empty());

    let squads = &tree.armies[0].squads;
    assert_eq!(squads.len(), 2);
    assert_eq!(squads[0].id, boyz.id);
    assert_eq!(squads[1].id, nobz.id);
    assert_eq!(squads[0].minis.len(), 1);
    assert_eq!(squads[0].minis[0].id, boy.id);
    assert!(squads[1].minis.is_empty());

    Ok(())
}

/// Expect records of other users to be left out
#[tokio::test]
async fn excludes_other_users() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let other = test.user().insert_user("google-sub-2").await?;
    test.tracker()
        .insert_hierarchy(other.id, "Necrons", "Warriors", "Warrior #1")
        .await?;
    test.sign_in("google-sub-1").await?;

    let result = get_dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let tree: DashboardTree = body_json(result.unwrap().into_response()).await;
    assert!(tree.armies.is_empty());

    Ok(())
}

/// Expect 401 for an anonymous session
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let result = get_dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
