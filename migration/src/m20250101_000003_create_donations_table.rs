use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000001_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::Id))
                    .col(integer(Donation::UserId))
                    .col(double(Donation::Amount))
                    .col(
                        date_time(Donation::DonationDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(Donation::Message))
                    .col(string(Donation::Name))
                    .col(string_null(Donation::Contact))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_user_id")
                            .from(Donation::Table, Donation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donation {
    #[sea_orm(iden = "donations")]
    Table,
    Id,
    UserId,
    Amount,
    DonationDate,
    Message,
    Name,
    Contact,
}
