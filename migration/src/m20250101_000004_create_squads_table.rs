use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(pk_auto(Squad::Id))
                    .col(string(Squad::FirstName))
                    .col(string(Squad::LastName))
                    .col(string(Squad::Position))
                    .col(string_uniq(Squad::JerseyNumber))
                    .col(string(Squad::Biography))
                    .col(text(Squad::Image))
                    .col(double_null(Squad::Weight))
                    .col(double_null(Squad::Height))
                    .col(date_null(Squad::DateOfBirth))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Squad::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Squad {
    #[sea_orm(iden = "squads")]
    Table,
    Id,
    FirstName,
    LastName,
    Position,
    JerseyNumber,
    Biography,
    Image,
    Weight,
    Height,
    DateOfBirth,
}
