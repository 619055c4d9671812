use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Merchandise::Table)
                    .if_not_exists()
                    .col(pk_auto(Merchandise::Id))
                    .col(string(Merchandise::Name))
                    .col(text(Merchandise::Description))
                    .col(double(Merchandise::Price))
                    .col(integer(Merchandise::Stock))
                    .col(text(Merchandise::Image))
                    .col(string(Merchandise::Category))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Merchandise::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Merchandise {
    Table,
    Id,
    Name,
    Description,
    Price,
    Stock,
    Image,
    Category,
}
