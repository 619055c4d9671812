use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        merchandise::{MerchandiseListDto, MerchandisePayloadDto, MerchandiseResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity, Permission},
        model::merchandise::{CreateMerchandiseParams, UpdateMerchandiseParams},
        service::merchandise::MerchandiseService,
        state::AppState,
    },
};

/// Tag for grouping merchandise endpoints in OpenAPI documentation
pub static MERCHANDISE_TAG: &str = "merchandise";

/// Add a shop item.
///
/// # Access Control
/// - `Admin` - Only admins can stock the shop
#[utoipa::path(
    post,
    path = "/api/v1/merchandise/create",
    tag = MERCHANDISE_TAG,
    request_body = MerchandisePayloadDto,
    responses(
        (status = 201, description = "Merchandise created", body = MerchandiseResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn create_merchandise(
    State(state): State<AppState>,
    identity: BearerIdentity,
    payload: Result<Json<MerchandisePayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = CreateMerchandiseParams::from_dto(payload)?;

    let merchandise = MerchandiseService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(MerchandiseResponseDto {
            message: Some("Merchandise created successfully".to_string()),
            merchandise: merchandise.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/merchandise",
    tag = MERCHANDISE_TAG,
    responses(
        (status = 200, description = "All merchandise", body = MerchandiseListDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn get_merchandises(
    State(state): State<AppState>,
    identity: BearerIdentity,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let merchandises = MerchandiseService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(MerchandiseListDto {
            merchandises: merchandises.into_iter().map(|m| m.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/merchandise/{id}",
    tag = MERCHANDISE_TAG,
    params(("id" = i32, Path, description = "Merchandise ID")),
    responses(
        (status = 200, description = "The shop item", body = MerchandiseResponseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Merchandise not found", body = ErrorDto)
    ),
)]
pub async fn get_merchandise(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let merchandise = MerchandiseService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Merchandise not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(MerchandiseResponseDto {
            message: None,
            merchandise: merchandise.into_dto(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/merchandise/edit/{id}",
    tag = MERCHANDISE_TAG,
    params(("id" = i32, Path, description = "Merchandise ID")),
    request_body = MerchandisePayloadDto,
    responses(
        (status = 200, description = "Merchandise updated", body = MerchandiseResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Merchandise not found", body = ErrorDto)
    ),
)]
pub async fn update_merchandise(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
    payload: Result<Json<MerchandisePayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = UpdateMerchandiseParams::from_dto(payload)?;

    let merchandise = MerchandiseService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Merchandise not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(MerchandiseResponseDto {
            message: Some("Merchandise updated successfully".to_string()),
            merchandise: merchandise.into_dto(),
        }),
    ))
}

/// Remove a shop item.
///
/// Fails with 400 while order items still reference it.
#[utoipa::path(
    delete,
    path = "/api/v1/merchandise/delete/{id}",
    tag = MERCHANDISE_TAG,
    params(("id" = i32, Path, description = "Merchandise ID")),
    responses(
        (status = 200, description = "Merchandise deleted", body = MessageDto),
        (status = 400, description = "Access denied or item still ordered", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Merchandise not found", body = ErrorDto)
    ),
)]
pub async fn delete_merchandise(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    if !MerchandiseService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Merchandise not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Merchandise deleted successfully"))))
}
