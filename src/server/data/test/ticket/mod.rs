use crate::server::{
    data::ticket::TicketRepository,
    model::ticket::{CreateTicketParams, UpdateTicketParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
