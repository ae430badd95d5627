use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::util::time::now_naive;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user for an OAuth subject
    pub async fn create(
        &self,
        subject: &str,
        email: Option<String>,
    ) -> Result<entity::painttracker_user::Model, DbErr> {
        let user = entity::painttracker_user::ActiveModel {
            subject: ActiveValue::Set(subject.to_string()),
            email: ActiveValue::Set(email),
            created_at: ActiveValue::Set(now_naive()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::painttracker_user::Model>, DbErr> {
        entity::prelude::PainttrackerUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<entity::painttracker_user::Model>, DbErr> {
        entity::prelude::PainttrackerUser::find()
            .filter(entity::painttracker_user::Column::Subject.eq(subject))
            .one(self.db)
            .await
    }

    /// Updates the email reported by the OAuth provider, `Ok(None)` if the user doesn't exist
    pub async fn update_email(
        &self,
        user_id: i32,
        email: Option<String>,
    ) -> Result<Option<entity::painttracker_user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.email = ActiveValue::Set(email);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
