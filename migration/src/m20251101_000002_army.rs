use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_painttracker_user::PainttrackerUser;

static IDX_ARMY_USER_ID: &str = "idx-army-user_id";
static FK_ARMY_USER_ID: &str = "fk-army-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Army::Table)
                    .if_not_exists()
                    .col(pk_uuid(Army::Id))
                    .col(integer(Army::UserId))
                    .col(string_len(Army::Name, 120))
                    .col(timestamp(Army::CreatedAt))
                    .col(timestamp(Army::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARMY_USER_ID)
                    .table(Army::Table)
                    .col(Army::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARMY_USER_ID)
                    .from_tbl(Army::Table)
                    .from_col(Army::UserId)
                    .to_tbl(PainttrackerUser::Table)
                    .to_col(PainttrackerUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARMY_USER_ID)
                    .table(Army::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ARMY_USER_ID)
                    .table(Army::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Army::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Army {
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
    UpdatedAt,
}
