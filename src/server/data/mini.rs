use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{model::stage::Stage, server::util::time::now_naive};

/// Editable fields of a mini.
#[derive(Debug, Clone, PartialEq)]
pub struct MiniFields {
    pub name: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub struct MiniRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MiniRepository<'a, C> {
    /// Creates a new instance of [`MiniRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a mini with every stage incomplete, the caller must have checked the squad's owner
    pub async fn create(
        &self,
        user_id: i32,
        squad_id: Uuid,
        fields: MiniFields,
    ) -> Result<entity::mini::Model, DbErr> {
        let now = now_naive();

        let mini = entity::mini::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            squad_id: ActiveValue::Set(squad_id),
            name: ActiveValue::Set(fields.name),
            description: ActiveValue::Set(fields.description),
            tags: ActiveValue::Set(fields.tags.map(serde_json::Value::from)),
            assembled: ActiveValue::Set(false),
            primed: ActiveValue::Set(false),
            painted: ActiveValue::Set(false),
            based: ActiveValue::Set(false),
            photographed: ActiveValue::Set(false),
            assembled_at: ActiveValue::Set(None),
            primed_at: ActiveValue::Set(None),
            painted_at: ActiveValue::Set(None),
            based_at: ActiveValue::Set(None),
            photographed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        mini.insert(self.db).await
    }

    /// Finds a mini owned by `user_id`
    pub async fn get(
        &self,
        mini_id: Uuid,
        user_id: i32,
    ) -> Result<Option<entity::mini::Model>, DbErr> {
        entity::prelude::Mini::find_by_id(mini_id)
            .filter(entity::mini::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Minis of a user oldest first, optionally only those of one squad
    pub async fn list(
        &self,
        user_id: i32,
        squad_id: Option<Uuid>,
    ) -> Result<Vec<entity::mini::Model>, DbErr> {
        let mut query =
            entity::prelude::Mini::find().filter(entity::mini::Column::UserId.eq(user_id));

        if let Some(squad_id) = squad_id {
            query = query.filter(entity::mini::Column::SquadId.eq(squad_id));
        }

        query
            .order_by_asc(entity::mini::Column::CreatedAt)
            .order_by_asc(entity::mini::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the editable fields and optionally moves the mini to another squad
    ///
    /// Returns `Ok(None)` if the mini doesn't exist or belongs to another user. The caller must
    /// have checked the owner of the target squad.
    pub async fn update(
        &self,
        mini_id: Uuid,
        user_id: i32,
        fields: MiniFields,
        squad_id: Option<Uuid>,
    ) -> Result<Option<entity::mini::Model>, DbErr> {
        let Some(mini) = self.get(mini_id, user_id).await? else {
            return Ok(None);
        };

        let mut mini_am = mini.into_active_model();
        mini_am.name = ActiveValue::Set(fields.name);
        mini_am.description = ActiveValue::Set(fields.description);
        mini_am.tags = ActiveValue::Set(fields.tags.map(serde_json::Value::from));
        if let Some(squad_id) = squad_id {
            mini_am.squad_id = ActiveValue::Set(squad_id);
        }
        mini_am.updated_at = ActiveValue::Set(now_naive());

        let mini = mini_am.update(self.db).await?;

        Ok(Some(mini))
    }

    /// Sets exactly one stage flag together with its timestamp
    ///
    /// Completing an already complete stage keeps its original timestamp, clearing a stage clears
    /// the timestamp. Returns `Ok(None)` if the mini doesn't exist or belongs to another user.
    pub async fn set_stage(
        &self,
        mini_id: Uuid,
        user_id: i32,
        stage: Stage,
        value: bool,
        now: NaiveDateTime,
    ) -> Result<Option<entity::mini::Model>, DbErr> {
        let Some(mini) = self.get(mini_id, user_id).await? else {
            return Ok(None);
        };

        let completed_at = match (value, stage_completed_at(&mini, stage)) {
            (true, Some(existing)) => Some(existing),
            (true, None) => Some(now),
            (false, _) => None,
        };

        let (flag_column, at_column) = stage_columns(stage);

        let mut mini_am = mini.into_active_model();
        mini_am.set(flag_column, value.into());
        mini_am.set(at_column, completed_at.into());
        mini_am.updated_at = ActiveValue::Set(now);

        let mini = mini_am.update(self.db).await?;

        Ok(Some(mini))
    }

    /// Deletes a mini
    ///
    /// Returns OK regardless of the mini existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, mini_id: Uuid, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Mini::delete_many()
            .filter(entity::mini::Column::Id.eq(mini_id))
            .filter(entity::mini::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

/// Flag and timestamp columns of a stage
fn stage_columns(stage: Stage) -> (entity::mini::Column, entity::mini::Column) {
    use entity::mini::Column;

    match stage {
        Stage::Assembled => (Column::Assembled, Column::AssembledAt),
        Stage::Primed => (Column::Primed, Column::PrimedAt),
        Stage::Painted => (Column::Painted, Column::PaintedAt),
        Stage::Based => (Column::Based, Column::BasedAt),
        Stage::Photographed => (Column::Photographed, Column::PhotographedAt),
    }
}

/// Completion time of a stage, `None` unless the stage flag is set
fn stage_completed_at(mini: &entity::mini::Model, stage: Stage) -> Option<NaiveDateTime> {
    let (done, at) = match stage {
        Stage::Assembled => (mini.assembled, mini.assembled_at),
        Stage::Primed => (mini.primed, mini.primed_at),
        Stage::Painted => (mini.painted, mini.painted_at),
        Stage::Based => (mini.based, mini.based_at),
        Stage::Photographed => (mini.photographed, mini.photographed_at),
    };

    at.filter(|_| done)
}
