//! Army, squad, and mini fixtures.
//!
//! Each inserted record is timestamped slightly after the previous one so list ordering by
//! creation time matches insertion order.

use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{
    error::TestError,
    model::{ArmyModel, MiniModel, SquadModel},
    TestContext,
};

impl TestContext {
    pub fn tracker<'a>(&'a mut self) -> TrackerFixtures<'a> {
        TrackerFixtures { setup: self }
    }
}

pub struct TrackerFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> TrackerFixtures<'a> {
    pub async fn insert_army(&mut self, user_id: i32, name: &str) -> Result<ArmyModel, TestError> {
        let now = self.setup.next_fixture_time();

        Ok(entity::prelude::Army::insert(entity::army::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_squad(
        &mut self,
        user_id: i32,
        army_id: Uuid,
        name: &str,
    ) -> Result<SquadModel, TestError> {
        let now = self.setup.next_fixture_time();

        Ok(entity::prelude::Squad::insert(entity::squad::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            army_id: ActiveValue::Set(army_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mini with no stages complete, description, or tags.
    pub async fn insert_mini(
        &mut self,
        user_id: i32,
        squad_id: Uuid,
        name: &str,
    ) -> Result<MiniModel, TestError> {
        self.insert_mini_with_details(user_id, squad_id, name, None, None)
            .await
    }

    pub async fn insert_mini_with_details(
        &mut self,
        user_id: i32,
        squad_id: Uuid,
        name: &str,
        description: Option<&str>,
        tags: Option<Vec<&str>>,
    ) -> Result<MiniModel, TestError> {
        let now = self.setup.next_fixture_time();
        let tags = tags.map(|tags| serde_json::json!(tags));

        Ok(entity::prelude::Mini::insert(entity::mini::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            squad_id: ActiveValue::Set(squad_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            tags: ActiveValue::Set(tags),
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
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an army with one squad holding one mini, returning all three.
    pub async fn insert_hierarchy(
        &mut self,
        user_id: i32,
        army_name: &str,
        squad_name: &str,
        mini_name: &str,
    ) -> Result<(ArmyModel, SquadModel, MiniModel), TestError> {
        let army = self.insert_army(user_id, army_name).await?;
        let squad = self.insert_squad(user_id, army.id, squad_name).await?;
        let mini = self.insert_mini(user_id, squad.id, mini_name).await?;

        Ok((army, squad, mini))
    }
}
