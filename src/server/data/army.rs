use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::time::now_naive;

pub struct ArmyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArmyRepository<'a, C> {
    /// Creates a new instance of [`ArmyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, name: String) -> Result<entity::army::Model, DbErr> {
        let now = now_naive();

        let army = entity::army::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        army.insert(self.db).await
    }

    /// Finds an army owned by `user_id`
    pub async fn get(
        &self,
        army_id: Uuid,
        user_id: i32,
    ) -> Result<Option<entity::army::Model>, DbErr> {
        entity::prelude::Army::find_by_id(army_id)
            .filter(entity::army::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// All armies of a user, oldest first
    pub async fn list(&self, user_id: i32) -> Result<Vec<entity::army::Model>, DbErr> {
        entity::prelude::Army::find()
            .filter(entity::army::Column::UserId.eq(user_id))
            .order_by_asc(entity::army::Column::CreatedAt)
            .order_by_asc(entity::army::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames an army, `Ok(None)` if it doesn't exist or belongs to another user
    pub async fn update(
        &self,
        army_id: Uuid,
        user_id: i32,
        name: String,
    ) -> Result<Option<entity::army::Model>, DbErr> {
        let Some(army) = self.get(army_id, user_id).await? else {
            return Ok(None);
        };

        let mut army_am = army.into_active_model();
        army_am.name = ActiveValue::Set(name);
        army_am.updated_at = ActiveValue::Set(now_naive());

        let army = army_am.update(self.db).await?;

        Ok(Some(army))
    }

    /// Deletes an army along with its squads and minis
    ///
    /// Returns OK regardless of the army existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, army_id: Uuid, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Army::delete_many()
            .filter(entity::army::Column::Id.eq(army_id))
            .filter(entity::army::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
