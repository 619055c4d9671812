use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{EventListDto, EventPayloadDto, EventResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity, Permission},
        model::event::{CreateEventParams, UpdateEventParams},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Schedule an event.
///
/// # Access Control
/// - `Admin` - Only admins can schedule events
#[utoipa::path(
    post,
    path = "/api/v1/event/create",
    tag = EVENT_TAG,
    request_body = EventPayloadDto,
    responses(
        (status = 201, description = "Event created", body = EventResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    identity: BearerIdentity,
    payload: Result<Json<EventPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = CreateEventParams::from_dto(payload)?;

    let event = EventService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventResponseDto {
            message: Some("Event created successfully".to_string()),
            event: event.into_dto(),
        }),
    ))
}

/// List events. Open to anyone.
#[utoipa::path(
    get,
    path = "/api/v1/event",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = EventListDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(EventListDto {
            events: events.into_iter().map(|e| e.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/event/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = EventResponseDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(EventResponseDto {
            message: None,
            event: event.into_dto(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/event/edit/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = EventPayloadDto,
    responses(
        (status = 200, description = "Event updated", body = EventResponseDto),
        (status = 400, description = "Invalid data or access denied", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
    payload: Result<Json<EventPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = UpdateEventParams::from_dto(payload)?;

    let event = EventService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(EventResponseDto {
            message: Some("Event updated successfully".to_string()),
            event: event.into_dto(),
        }),
    ))
}

/// Cancel an event.
///
/// Fails with 400 while tickets still reference the event.
#[utoipa::path(
    delete,
    path = "/api/v1/event/delete/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted", body = MessageDto),
        (status = 400, description = "Access denied or event has tickets", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    if !EventService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Event deleted successfully"))))
}
