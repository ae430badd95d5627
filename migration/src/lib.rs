pub use sea_orm_migration::prelude::*;

mod m20251101_000001_painttracker_user;
mod m20251101_000002_army;
mod m20251101_000003_squad;
mod m20251101_000004_mini;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_painttracker_user::Migration),
            Box::new(m20251101_000002_army::Migration),
            Box::new(m20251101_000003_squad::Migration),
            Box::new(m20251101_000004_mini::Migration),
        ]
    }
}
