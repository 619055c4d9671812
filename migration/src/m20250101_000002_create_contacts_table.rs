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
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string(Contact::Name))
                    .col(string_uniq(Contact::Email))
                    .col(string(Contact::Message))
                    .col(
                        date_time(Contact::Date)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer_null(Contact::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contacts_user_id")
                            .from(Contact::Table, Contact::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contact {
    #[sea_orm(iden = "contacts")]
    Table,
    Id,
    Name,
    Email,
    Message,
    Date,
    UserId,
}
