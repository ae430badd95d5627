use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::squad::SquadDto,
    server::{
        data::{army::ArmyRepository, squad::SquadRepository},
        error::{tracker::TrackerError, Error},
        util::validation::SquadInput,
    },
};

pub struct SquadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SquadService<'a> {
    /// Creates a new instance of [`SquadService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Squads of the user oldest first, optionally only those of one army
    pub async fn list(&self, user_id: i32, army_id: Option<Uuid>) -> Result<Vec<SquadDto>, Error> {
        let squads = SquadRepository::new(self.db).list(user_id, army_id).await?;

        Ok(squads.into_iter().map(SquadDto::from).collect())
    }

    /// Creates a squad under one of the user's armies
    ///
    /// # Errors
    /// - [`TrackerError::ArmyNotFound`] if the army is missing or belongs to another user
    pub async fn create(&self, user_id: i32, input: SquadInput) -> Result<SquadDto, Error> {
        let Some(army_id) = input.army_id else {
            return Err(Error::InternalError(
                "Squad creation requires a validated army ID".to_string(),
            ));
        };

        let txn = self.db.begin().await?;

        if ArmyRepository::new(&txn).get(army_id, user_id).await?.is_none() {
            return Err(TrackerError::ArmyNotFound.into());
        }

        let squad = SquadRepository::new(&txn)
            .create(user_id, army_id, input.name)
            .await?;

        txn.commit().await?;

        Ok(squad.into())
    }

    /// Renames a squad and moves it when `input.army_id` is set
    ///
    /// # Errors
    /// - [`TrackerError::SquadNotFound`] if the squad is missing or belongs to another user
    /// - [`TrackerError::TargetArmyNotFound`] if the target army is missing or belongs to
    ///   another user
    pub async fn update(
        &self,
        user_id: i32,
        squad_id: Uuid,
        input: SquadInput,
    ) -> Result<SquadDto, Error> {
        let txn = self.db.begin().await?;
        let squad_repository = SquadRepository::new(&txn);

        if squad_repository.get(squad_id, user_id).await?.is_none() {
            return Err(TrackerError::SquadNotFound.into());
        }

        if let Some(army_id) = input.army_id {
            if ArmyRepository::new(&txn).get(army_id, user_id).await?.is_none() {
                return Err(TrackerError::TargetArmyNotFound.into());
            }
        }

        let Some(squad) = squad_repository
            .update(squad_id, user_id, input.name, input.army_id)
            .await?
        else {
            return Err(TrackerError::SquadNotFound.into());
        };

        txn.commit().await?;

        Ok(squad.into())
    }

    /// Deletes a squad along with its minis
    pub async fn delete(&self, user_id: i32, squad_id: Uuid) -> Result<(), Error> {
        let result = SquadRepository::new(self.db)
            .delete(squad_id, user_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(TrackerError::SquadNotFound.into());
        }

        Ok(())
    }
}
