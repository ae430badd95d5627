use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_painttracker_user::PainttrackerUser, m20251101_000002_army::Army};

static IDX_SQUAD_USER_ID: &str = "idx-squad-user_id";
static IDX_SQUAD_ARMY_ID: &str = "idx-squad-army_id";
static FK_SQUAD_USER_ID: &str = "fk-squad-user_id";
static FK_SQUAD_ARMY_ID: &str = "fk-squad-army_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Squad::Table)
                    .if_not_exists()
                    .col(pk_uuid(Squad::Id))
                    .col(integer(Squad::UserId))
                    .col(uuid(Squad::ArmyId))
                    .col(string_len(Squad::Name, 120))
                    .col(timestamp(Squad::CreatedAt))
                    .col(timestamp(Squad::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SQUAD_USER_ID)
                    .table(Squad::Table)
                    .col(Squad::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SQUAD_ARMY_ID)
                    .table(Squad::Table)
                    .col(Squad::ArmyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SQUAD_USER_ID)
                    .from_tbl(Squad::Table)
                    .from_col(Squad::UserId)
                    .to_tbl(PainttrackerUser::Table)
                    .to_col(PainttrackerUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SQUAD_ARMY_ID)
                    .from_tbl(Squad::Table)
                    .from_col(Squad::ArmyId)
                    .to_tbl(Army::Table)
                    .to_col(Army::Id)
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
                    .name(FK_SQUAD_ARMY_ID)
                    .table(Squad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SQUAD_USER_ID)
                    .table(Squad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SQUAD_ARMY_ID)
                    .table(Squad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SQUAD_USER_ID)
                    .table(Squad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Squad::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Squad {
    Table,
    Id,
    UserId,
    ArmyId,
    Name,
    CreatedAt,
    UpdatedAt,
}
