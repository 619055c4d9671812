use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        player_statistic::{
            PlayerStatisticListDto, PlayerStatisticPayloadDto, PlayerStatisticResponseDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity, Permission},
        model::player_statistic::{CreatePlayerStatisticParams, UpdatePlayerStatisticParams},
        service::player_statistic::PlayerStatisticService,
        state::AppState,
    },
};

/// Tag for grouping player statistic endpoints in OpenAPI documentation
pub static PLAYER_STATISTIC_TAG: &str = "playerstatistics";

/// Record statistics for a squad player.
///
/// Counters left out of the payload start at zero.
///
/// # Access Control
/// - `Admin` - Only admins can record statistics
///
/// # Returns
/// - `201 Created` - The created row
/// - `400 Bad Request` - Invalid data or access denied
/// - `404 Not Found` - The squad player does not exist
#[utoipa::path(
    post,
    path = "/api/v1/playerstatistics/create",
    tag = PLAYER_STATISTIC_TAG,
    request_body = PlayerStatisticPayloadDto,
    responses(
        (status = 201, description = "Statistic created", body = PlayerStatisticResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Squad not found", body = ErrorDto)
    ),
)]
pub async fn create_statistic(
    State(state): State<AppState>,
    identity: BearerIdentity,
    payload: Result<Json<PlayerStatisticPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = CreatePlayerStatisticParams::from_dto(payload)?;

    let statistic = PlayerStatisticService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(PlayerStatisticResponseDto {
            message: Some("Player statistic created successfully".to_string()),
            statistic: statistic.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/playerstatistics",
    tag = PLAYER_STATISTIC_TAG,
    responses(
        (status = 200, description = "All statistics", body = PlayerStatisticListDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    identity: BearerIdentity,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let statistics = PlayerStatisticService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(PlayerStatisticListDto {
            message: None,
            statistics: statistics.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/playerstatistics/{id}",
    tag = PLAYER_STATISTIC_TAG,
    params(("id" = i32, Path, description = "Statistic ID")),
    responses(
        (status = 200, description = "The statistic row", body = PlayerStatisticResponseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Player statistic not found", body = ErrorDto)
    ),
)]
pub async fn get_statistic(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let statistic = PlayerStatisticService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Player statistic not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(PlayerStatisticResponseDto {
            message: None,
            statistic: statistic.into_dto(),
        }),
    ))
}

/// Get every statistic row of one squad player.
///
/// # Returns
/// - `200 OK` - The rows, at least one
/// - `404 Not Found` - Squad missing or without statistics
#[utoipa::path(
    get,
    path = "/api/v1/playerstatistics/squad/{squad_id}",
    tag = PLAYER_STATISTIC_TAG,
    params(("squad_id" = i32, Path, description = "Squad player ID")),
    responses(
        (status = 200, description = "Statistics of the player", body = PlayerStatisticListDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Squad missing or without statistics", body = ErrorDto)
    ),
)]
pub async fn get_statistics_by_squad(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(squad_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let statistics = PlayerStatisticService::new(&state.db)
        .get_by_squad(squad_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlayerStatisticListDto {
            message: None,
            statistics: statistics.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

/// Edit one statistic row.
///
/// # Access Control
/// - `Admin` - Only admins can edit statistics
#[utoipa::path(
    put,
    path = "/api/v1/playerstatistics/edit/{id}",
    tag = PLAYER_STATISTIC_TAG,
    params(("id" = i32, Path, description = "Statistic ID")),
    request_body = PlayerStatisticPayloadDto,
    responses(
        (status = 200, description = "Statistic updated", body = PlayerStatisticResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Player statistic not found", body = ErrorDto)
    ),
)]
pub async fn update_statistic(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
    payload: Result<Json<PlayerStatisticPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = UpdatePlayerStatisticParams::from_dto(payload)?;

    let statistic = PlayerStatisticService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Player statistic not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(PlayerStatisticResponseDto {
            message: Some("Player statistic updated successfully".to_string()),
            statistic: statistic.into_dto(),
        }),
    ))
}

/// Apply the same counter edit to every statistic row of a squad player.
///
/// # Access Control
/// - `Admin` - Only admins can edit statistics
#[utoipa::path(
    put,
    path = "/api/v1/playerstatistics/edit/squad/{squad_id}",
    tag = PLAYER_STATISTIC_TAG,
    params(("squad_id" = i32, Path, description = "Squad player ID")),
    request_body = PlayerStatisticPayloadDto,
    responses(
        (status = 200, description = "Statistics updated", body = PlayerStatisticListDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Squad missing or without statistics", body = ErrorDto)
    ),
)]
pub async fn update_statistics_by_squad(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(squad_id): Path<i32>,
    payload: Result<Json<PlayerStatisticPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = UpdatePlayerStatisticParams::from_dto(payload)?;

    let statistics = PlayerStatisticService::new(&state.db)
        .update_by_squad(squad_id, params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlayerStatisticListDto {
            message: Some("Player statistics updated successfully".to_string()),
            statistics: statistics.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/playerstatistics/delete/{id}",
    tag = PLAYER_STATISTIC_TAG,
    params(("id" = i32, Path, description = "Statistic ID")),
    responses(
        (status = 200, description = "Statistic deleted", body = MessageDto),
        (status = 400, description = "Access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Player statistic not found", body = ErrorDto)
    ),
)]
pub async fn delete_statistic(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    if !PlayerStatisticService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Player statistic not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Player statistic deleted successfully")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/playerstatistics/delete/squad/{squad_id}",
    tag = PLAYER_STATISTIC_TAG,
    params(("squad_id" = i32, Path, description = "Squad player ID")),
    responses(
        (status = 200, description = "Statistics deleted", body = MessageDto),
        (status = 400, description = "Access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Squad missing or without statistics", body = ErrorDto)
    ),
)]
pub async fn delete_statistics_by_squad(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(squad_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let removed = PlayerStatisticService::new(&state.db)
        .delete_by_squad(squad_id)
        .await?;

    tracing::debug!("Removed {} statistic rows of squad {}", removed, squad_id);

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Player statistics deleted successfully")),
    ))
}
