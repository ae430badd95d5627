use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user without an email.
    pub async fn insert_user(&mut self, subject: &str) -> Result<UserModel, TestError> {
        self.insert_user_with_email(subject, None).await
    }

    pub async fn insert_user_with_email(
        &mut self,
        subject: &str,
        email: Option<&str>,
    ) -> Result<UserModel, TestError> {
        let created_at = self.setup.next_fixture_time();

        Ok(
            entity::prelude::PainttrackerUser::insert(entity::painttracker_user::ActiveModel {
                subject: ActiveValue::Set(subject.to_string()),
                email: ActiveValue::Set(email.map(str::to_string)),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
