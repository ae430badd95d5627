use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::{mini::MiniDto, stage::Stage},
    server::{
        data::{
            mini::{MiniFields, MiniRepository},
            squad::SquadRepository,
        },
        error::{tracker::TrackerError, Error},
        util::{time::now_naive, validation::MiniInput},
    },
};

pub struct MiniService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MiniService<'a> {
    /// Creates a new instance of [`MiniService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Minis of the user oldest first, optionally only those of one squad
    pub async fn list(&self, user_id: i32, squad_id: Option<Uuid>) -> Result<Vec<MiniDto>, Error> {
        let minis = MiniRepository::new(self.db).list(user_id, squad_id).await?;

        Ok(minis.into_iter().map(MiniDto::from).collect())
    }

    /// Creates a mini with no stages complete under one of the user's squads
    ///
    /// # Errors
    /// - [`TrackerError::SquadNotFound`] if the squad is missing or belongs to another user
    pub async fn create(&self, user_id: i32, input: MiniInput) -> Result<MiniDto, Error> {
        let Some(squad_id) = input.squad_id else {
            return Err(Error::InternalError(
                "Mini creation requires a validated squad ID".to_string(),
            ));
        };

        let txn = self.db.begin().await?;

        if SquadRepository::new(&txn)
            .get(squad_id, user_id)
            .await?
            .is_none()
        {
            return Err(TrackerError::SquadNotFound.into());
        }

        let mini = MiniRepository::new(&txn)
            .create(user_id, squad_id, fields(input))
            .await?;

        txn.commit().await?;

        Ok(mini.into())
    }

    /// Replaces name, description, and tags, moving the mini when `input.squad_id` is set
    ///
    /// Omitted description or tags are cleared.
    ///
    /// # Errors
    /// - [`TrackerError::MiniNotFound`] if the mini is missing or belongs to another user
    /// - [`TrackerError::TargetSquadNotFound`] if the target squad is missing or belongs to
    ///   another user
    pub async fn update(
        &self,
        user_id: i32,
        mini_id: Uuid,
        input: MiniInput,
    ) -> Result<MiniDto, Error> {
        let txn = self.db.begin().await?;
        let mini_repository = MiniRepository::new(&txn);

        if mini_repository.get(mini_id, user_id).await?.is_none() {
            return Err(TrackerError::MiniNotFound.into());
        }

        let squad_id = input.squad_id;
        if let Some(squad_id) = squad_id {
            if SquadRepository::new(&txn)
                .get(squad_id, user_id)
                .await?
                .is_none()
            {
                return Err(TrackerError::TargetSquadNotFound.into());
            }
        }

        let Some(mini) = mini_repository
            .update(mini_id, user_id, fields(input), squad_id)
            .await?
        else {
            return Err(TrackerError::MiniNotFound.into());
        };

        txn.commit().await?;

        Ok(mini.into())
    }

    /// Sets a single stage of a mini
    ///
    /// Only the given stage changes; earlier or later stages are left for the client to send
    /// separately. Completing an already complete stage keeps its timestamp.
    pub async fn set_stage(
        &self,
        user_id: i32,
        mini_id: Uuid,
        stage: Stage,
        value: bool,
    ) -> Result<MiniDto, Error> {
        let Some(mini) = MiniRepository::new(self.db)
            .set_stage(mini_id, user_id, stage, value, now_naive())
            .await?
        else {
            return Err(TrackerError::MiniNotFound.into());
        };

        Ok(mini.into())
    }

    pub async fn delete(&self, user_id: i32, mini_id: Uuid) -> Result<(), Error> {
        let result = MiniRepository::new(self.db).delete(mini_id, user_id).await?;

        if result.rows_affected == 0 {
            return Err(TrackerError::MiniNotFound.into());
        }

        Ok(())
    }
}

fn fields(input: MiniInput) -> MiniFields {
    MiniFields {
        name: input.name,
        description: input.description,
        tags: input.tags,
    }
}
