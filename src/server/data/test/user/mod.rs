use crate::server::{
    data::user::UserRepository,
    model::user::{RegisterUserParams, UpdateUserParams, UserRole},
};
use chrono::NaiveDate;
use entity::prelude::User;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod update;

fn register_params(email: &str) -> RegisterUserParams {
    RegisterUserParams {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        contact: "0123456789".to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
        join_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        membership_status: "Active".to_string(),
        role: UserRole::User,
    }
}
