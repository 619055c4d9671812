use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        squad::{SquadListDto, SquadPayloadDto, SquadResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity, Permission},
        model::squad::{CreateSquadParams, UpdateSquadParams},
        service::squad::SquadService,
        state::AppState,
    },
};

/// Tag for grouping squad endpoints in OpenAPI documentation
pub static SQUAD_TAG: &str = "squad";

/// Add a player to the squad.
///
/// # Access Control
/// - `Admin` - Only admins can add players
///
/// # Returns
/// - `201 Created` - The created player
/// - `400 Bad Request` - Invalid data or caller is not an admin
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    post,
    path = "/api/v1/squad/create",
    tag = SQUAD_TAG,
    request_body = SquadPayloadDto,
    responses(
        (status = 201, description = "Player created", body = SquadResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn create_squad(
    State(state): State<AppState>,
    identity: BearerIdentity,
    payload: Result<Json<SquadPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = CreateSquadParams::from_dto(payload)?;

    let squad = SquadService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(SquadResponseDto {
            message: Some("Squad created successfully".to_string()),
            squad: squad.into_dto(),
        }),
    ))
}

/// List the squad.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/squad",
    tag = SQUAD_TAG,
    responses(
        (status = 200, description = "All players", body = SquadListDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn get_squads(
    State(state): State<AppState>,
    identity: BearerIdentity,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let squads = SquadService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(SquadListDto {
            squads: squads.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/squad/{id}",
    tag = SQUAD_TAG,
    params(("id" = i32, Path, description = "Squad player ID")),
    responses(
        (status = 200, description = "The player", body = SquadResponseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Squad not found", body = ErrorDto)
    ),
)]
pub async fn get_squad(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let squad = SquadService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Squad not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(SquadResponseDto {
            message: None,
            squad: squad.into_dto(),
        }),
    ))
}

/// Edit a player.
///
/// # Access Control
/// - `Admin` - Only admins can edit players
#[utoipa::path(
    put,
    path = "/api/v1/squad/edit/{id}",
    tag = SQUAD_TAG,
    params(("id" = i32, Path, description = "Squad player ID")),
    request_body = SquadPayloadDto,
    responses(
        (status = 200, description = "Player updated", body = SquadResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Squad not found", body = ErrorDto)
    ),
)]
pub async fn update_squad(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
    payload: Result<Json<SquadPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = UpdateSquadParams::from_dto(payload)?;

    let squad = SquadService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Squad not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(SquadResponseDto {
            message: Some("Squad updated successfully".to_string()),
            squad: squad.into_dto(),
        }),
    ))
}

/// Remove a player and their statistics.
///
/// # Access Control
/// - `Admin` - Only admins can remove players
#[utoipa::path(
    delete,
    path = "/api/v1/squad/delete/{id}",
    tag = SQUAD_TAG,
    params(("id" = i32, Path, description = "Squad player ID")),
    responses(
        (status = 200, description = "Player deleted", body = MessageDto),
        (status = 400, description = "Access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Squad not found", body = ErrorDto)
    ),
)]
pub async fn delete_squad(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    if !SquadService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Squad not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Squad deleted successfully"))))
}
