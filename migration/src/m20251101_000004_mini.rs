use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_painttracker_user::PainttrackerUser, m20251101_000003_squad::Squad,
};

static IDX_MINI_USER_ID: &str = "idx-mini-user_id";
static IDX_MINI_SQUAD_ID: &str = "idx-mini-squad_id";
static FK_MINI_USER_ID: &str = "fk-mini-user_id";
static FK_MINI_SQUAD_ID: &str = "fk-mini-squad_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mini::Table)
                    .if_not_exists()
                    .col(pk_uuid(Mini::Id))
                    .col(integer(Mini::UserId))
                    .col(uuid(Mini::SquadId))
                    .col(string_len(Mini::Name, 120))
                    .col(text_null(Mini::Description))
                    .col(json_null(Mini::Tags))
                    .col(boolean(Mini::Assembled).default(false))
                    .col(boolean(Mini::Primed).default(false))
                    .col(boolean(Mini::Painted).default(false))
                    .col(boolean(Mini::Based).default(false))
                    .col(boolean(Mini::Photographed).default(false))
                    .col(timestamp_null(Mini::AssembledAt))
                    .col(timestamp_null(Mini::PrimedAt))
                    .col(timestamp_null(Mini::PaintedAt))
                    .col(timestamp_null(Mini::BasedAt))
                    .col(timestamp_null(Mini::PhotographedAt))
                    .col(timestamp(Mini::CreatedAt))
                    .col(timestamp(Mini::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MINI_USER_ID)
                    .table(Mini::Table)
                    .col(Mini::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MINI_SQUAD_ID)
                    .table(Mini::Table)
                    .col(Mini::SquadId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MINI_USER_ID)
                    .from_tbl(Mini::Table)
                    .from_col(Mini::UserId)
                    .to_tbl(PainttrackerUser::Table)
                    .to_col(PainttrackerUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MINI_SQUAD_ID)
                    .from_tbl(Mini::Table)
                    .from_col(Mini::SquadId)
                    .to_tbl(Squad::Table)
                    .to_col(Squad::Id)
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
                    .name(FK_MINI_SQUAD_ID)
                    .table(Mini::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MINI_USER_ID)
                    .table(Mini::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MINI_SQUAD_ID)
                    .table(Mini::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MINI_USER_ID)
                    .table(Mini::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Mini::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Mini {
    Table,
    Id,
    UserId,
    SquadId,
    Name,
    Description,
    Tags,
    Assembled,
    Primed,
    Painted,
    Based,
    Photographed,
    AssembledAt,
    PrimedAt,
    PaintedAt,
    BasedAt,
    PhotographedAt,
    CreatedAt,
    UpdatedAt,
}
