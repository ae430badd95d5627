//! Builders for in-memory dashboard trees used by tracker tests.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::model::{
    dashboard::{ArmyNode, DashboardTree, SquadNode},
    mini::MiniDto,
    stage::Stage,
};

/// A mini with the given stages completed an hour ago and every other stage incomplete.
pub fn mini_with_stages(stages: &[Stage]) -> MiniDto {
    let created_at = Utc::now() - Duration::days(1);
    let completed_at = Utc::now() - Duration::hours(1);

    let mut mini = MiniDto {
        id: Uuid::from_u128(next_test_id()),
        squad_id: Uuid::nil(),
        name: "Boy #1".to_string(),
        description: None,
        tags: None,
        assembled: false,
        primed: false,
        painted: false,
        based: false,
        photographed: false,
        assembled_at: None,
        primed_at: None,
        painted_at: None,
        based_at: None,
        photographed_at: None,
        created_at,
        updated_at: created_at,
    };

    for stage in stages {
        mini.set_stage(*stage, Some(completed_at));
    }

    mini
}

/// A single army whose squads hold the given minis.
pub fn tree_with_minis(squads: Vec<Vec<MiniDto>>) -> DashboardTree {
    let now = Utc::now();
    let army_id = Uuid::from_u128(next_test_id());

    let squads = squads
        .into_iter()
        .map(|minis| {
            let squad_id = Uuid::from_u128(next_test_id());

            SquadNode {
                id: squad_id,
                army_id,
                name: "Boyz".to_string(),
                created_at: now,
                updated_at: now,
                minis: minis
                    .into_iter()
                    .map(|mini| MiniDto { squad_id, ..mini })
                    .collect(),
            }
        })
        .collect();

    DashboardTree {
        armies: vec![ArmyNode {
            id: army_id,
            name: "Orks".to_string(),
            created_at: now,
            updated_at: now,
            squads,
        }],
    }
}

fn next_test_id() -> u128 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed) as u128
}
