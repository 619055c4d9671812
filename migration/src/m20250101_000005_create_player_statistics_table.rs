use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000004_create_squads_table::Squad;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerStatistic::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerStatistic::Id))
                    .col(integer(PlayerStatistic::SquadId))
                    .col(integer(PlayerStatistic::MatchesPlayed))
                    .col(integer(PlayerStatistic::TriesScored).default(0))
                    .col(integer(PlayerStatistic::Conversions).default(0))
                    .col(integer(PlayerStatistic::Penalties).default(0))
                    .col(integer(PlayerStatistic::YellowCards).default(0))
                    .col(integer(PlayerStatistic::RedCards).default(0))
                    .col(integer(PlayerStatistic::MinutesPlayed).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_statistics_squad_id")
                            .from(PlayerStatistic::Table, PlayerStatistic::SquadId)
                            .to(Squad::Table, Squad::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerStatistic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerStatistic {
    #[sea_orm(iden = "player_statistics")]
    Table,
    Id,
    SquadId,
    MatchesPlayed,
    TriesScored,
    Conversions,
    Penalties,
    YellowCards,
    RedCards,
    MinutesPlayed,
}
