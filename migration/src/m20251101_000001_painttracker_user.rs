use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PainttrackerUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PainttrackerUser::Id))
                    .col(string_uniq(PainttrackerUser::Subject))
                    .col(string_null(PainttrackerUser::Email))
                    .col(timestamp(PainttrackerUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PainttrackerUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PainttrackerUser {
    Table,
    Id,
    Subject,
    Email,
    CreatedAt,
}
