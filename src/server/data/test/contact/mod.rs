use crate::server::{
    data::contact::ContactRepository,
    model::contact::{CreateContactParams, UpdateContactParams},
};
use entity::prelude::{Contact, User};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod crud;

fn contact_params(email: &str) -> CreateContactParams {
    CreateContactParams {
        name: "A".to_string(),
        email: email.to_string(),
        message: "hi".to_string(),
        user_id: None,
    }
}
