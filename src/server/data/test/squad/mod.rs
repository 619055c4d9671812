use crate::server::{
    data::squad::SquadRepository,
    model::squad::{CreateSquadParams, UpdateSquadParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
