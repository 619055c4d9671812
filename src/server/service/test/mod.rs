use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::User,
};

mod auth;

async fn club_db() -> TestContext {
    TestBuilder::new().with_club_tables().build().await.unwrap()
}

async fn member(db: &DatabaseConnection) -> Result<User, DbErr> {
    Ok(User::from_entity(factory::create_user(db).await?))
}

async fn admin(db: &DatabaseConnection) -> Result<User, DbErr> {
    Ok(User::from_entity(factory::create_admin(db).await?))
}

fn is_access_denied<T>(result: &Result<T, AppError>) -> bool {
    matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied(_, _))))
}
