use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{UserListDto, UserPayloadDto, UserResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity},
        model::user::UpdateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all accounts.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = UserListDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    identity: BearerIdentity,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Get one account.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The account", body = UserResponseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            message: None,
            user: user.into_dto(),
        }),
    ))
}

/// Edit an account.
///
/// Only the fields present in the payload change. A new password is re-hashed.
///
/// # Access Control
/// - The account owner or an admin; changing the role requires admin
#[utoipa::path(
    put,
    path = "/api/v1/user/edit/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserPayloadDto,
    responses(
        (status = 200, description = "Account updated", body = UserResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
    payload: Result<Json<UserPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let Json(payload) = payload?;
    let params = UpdateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db)
        .update(id, &caller, params)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            message: Some("User updated successfully".to_string()),
            user: user.into_dto(),
        }),
    ))
}

/// Delete an account.
///
/// # Access Control
/// - The account owner or an admin
#[utoipa::path(
    delete,
    path = "/api/v1/user/delete/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 400, description = "Access denied or account still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    if !UserService::new(&state.db).delete(id, &caller).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted successfully"))))
}
