use crate::server::{
    data::player_statistic::PlayerStatisticRepository,
    model::player_statistic::UpdatePlayerStatisticParams,
};
use entity::prelude::PlayerStatistic;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod by_squad;
