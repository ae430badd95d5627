use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::time::now_naive;

pub struct SquadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SquadRepository<'a, C> {
    /// Creates a new instance of [`SquadRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a squad under `army_id`, the caller must have checked the army's owner
    pub async fn create(
        &self,
        user_id: i32,
        army_id: Uuid,
        name: String,
    ) -> Result<entity::squad::Model, DbErr> {
        let now = now_naive();

        let squad = entity::squad::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            army_id: ActiveValue::Set(army_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        squad.insert(self.db).await
    }

    /// Finds a squad owned by `user_id`
    pub async fn get(
        &self,
        squad_id: Uuid,
        user_id: i32,
    ) -> Result<Option<entity::squad::Model>, DbErr> {
        entity::prelude::Squad::find_by_id(squad_id)
            .filter(entity::squad::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Squads of a user oldest first, optionally only those of one army
    pub async fn list(
        &self,
        user_id: i32,
        army_id: Option<Uuid>,
    ) -> Result<Vec<entity::squad::Model>, DbErr> {
        let mut query =
            entity::prelude::Squad::find().filter(entity::squad::Column::UserId.eq(user_id));

        if let Some(army_id) = army_id {
            query = query.filter(entity::squad::Column::ArmyId.eq(army_id));
        }

        query
            .order_by_asc(entity::squad::Column::CreatedAt)
            .order_by_asc(entity::squad::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a squad and optionally moves it to another army
    ///
    /// Returns `Ok(None)` if the squad doesn't exist or belongs to another user. The caller must
    /// have checked the owner of the target army.
    pub async fn update(
        &self,
        squad_id: Uuid,
        user_id: i32,
        name: String,
        army_id: Option<Uuid>,
    ) -> Result<Option<entity::squad::Model>, DbErr> {
        let Some(squad) = self.get(squad_id, user_id).await? else {
            return Ok(None);
        };

        let mut squad_am = squad.into_active_model();
        squad_am.name = ActiveValue::Set(name);
        if let Some(army_id) = army_id {
            squad_am.army_id = ActiveValue::Set(army_id);
        }
        squad_am.updated_at = ActiveValue::Set(now_naive());

        let squad = squad_am.update(self.db).await?;

        Ok(Some(squad))
    }

    /// Deletes a squad along with its minis
    ///
    /// Returns OK regardless of the squad existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, squad_id: Uuid, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Squad::delete_many()
            .filter(entity::squad::Column::Id.eq(squad_id))
            .filter(entity::squad::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
