use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::dashboard::{ArmyNode, DashboardTree, SquadNode},
    server::{
        data::{army::ArmyRepository, mini::MiniRepository, squad::SquadRepository},
        error::Error,
        model::db::{ArmyModel, MiniModel, SquadModel},
        service::retry::RetryContext,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the full army → squad → mini tree of a user
    ///
    /// Every level is ordered by creation time. Transient database failures are retried.
    pub async fn get_tree(&self, user_id: i32) -> Result<DashboardTree, Error> {
        let db = self.db.clone();

        RetryContext::new()
            .execute_with_retry(&format!("dashboard for user ID {}", user_id), || {
                let db = db.clone();

                Box::pin(async move {
                    let armies = ArmyRepository::new(&db).list(user_id).await?;
                    let squads = SquadRepository::new(&db).list(user_id, None).await?;
                    let minis = MiniRepository::new(&db).list(user_id, None).await?;

                    Ok(build_tree(armies, squads, minis))
                })
            })
            .await
    }
}

/// Groups ordered lists of armies, squads, and minis into a tree, keeping their order
///
/// Squads or minis whose parent is not in the lists are dropped.
pub fn build_tree(
    armies: Vec<ArmyModel>,
    squads: Vec<SquadModel>,
    minis: Vec<MiniModel>,
) -> DashboardTree {
    let mut minis_by_squad: HashMap<Uuid, Vec<MiniModel>> = HashMap::new();
    for mini in minis {
        minis_by_squad.entry(mini.squad_id).or_default().push(mini);
    }

    let mut squads_by_army: HashMap<Uuid, Vec<SquadNode>> = HashMap::new();
    for squad in squads {
        let minis = minis_by_squad.remove(&squad.id).unwrap_or_default();
        squads_by_army
            .entry(squad.army_id)
            .or_default()
            .push(SquadNode::from_model(squad, minis));
    }

    let armies = armies
        .into_iter()
        .map(|army| {
            let squads = squads_by_army.remove(&army.id).unwrap_or_default();
            ArmyNode::from_model(army, squads)
        })
        .collect();

    DashboardTree { armies }
}
