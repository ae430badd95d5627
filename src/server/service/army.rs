use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::army::ArmyDto,
    server::{
        data::army::ArmyRepository,
        error::{tracker::TrackerError, Error},
        util::validation::ArmyInput,
    },
};

pub struct ArmyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArmyService<'a> {
    /// Creates a new instance of [`ArmyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Armies of the user, oldest first
    pub async fn list(&self, user_id: i32) -> Result<Vec<ArmyDto>, Error> {
        let armies = ArmyRepository::new(self.db).list(user_id).await?;

        Ok(armies.into_iter().map(ArmyDto::from).collect())
    }

    pub async fn create(&self, user_id: i32, input: ArmyInput) -> Result<ArmyDto, Error> {
        let army = ArmyRepository::new(self.db)
            .create(user_id, input.name)
            .await?;

        Ok(army.into())
    }

    pub async fn update(
        &self,
        user_id: i32,
        army_id: Uuid,
        input: ArmyInput,
    ) -> Result<ArmyDto, Error> {
        let Some(army) = ArmyRepository::new(self.db)
            .update(army_id, user_id, input.name)
            .await?
        else {
            return Err(TrackerError::ArmyNotFound.into());
        };

        Ok(army.into())
    }

    /// Deletes an army along with its squads and their minis
    pub async fn delete(&self, user_id: i32, army_id: Uuid) -> Result<(), Error> {
        let result = ArmyRepository::new(self.db).delete(army_id, user_id).await?;

        if result.rows_affected == 0 {
            return Err(TrackerError::ArmyNotFound.into());
        }

        Ok(())
    }
}
