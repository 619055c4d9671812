use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        ticket::{TicketListDto, TicketPayloadDto, TicketResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity},
        model::ticket::{CreateTicketParams, UpdateTicketParams},
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// Issue a ticket for an event.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The ticket
/// - `400 Bad Request` - Invalid ticket data
/// - `404 Not Found` - The event does not exist
#[utoipa::path(
    post,
    path = "/api/v1/ticket/create",
    tag = TICKET_TAG,
    request_body = TicketPayloadDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketResponseDto),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    identity: BearerIdentity,
    payload: Result<Json<TicketPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let Json(payload) = payload?;
    let params = CreateTicketParams::from_dto(payload)?;

    let ticket = TicketService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(TicketResponseDto {
            message: Some("Ticket created successfully".to_string()),
            ticket: ticket.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/ticket",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "All tickets", body = TicketListDto)
    ),
)]
pub async fn get_tickets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tickets = TicketService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(TicketListDto {
            tickets: tickets.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/ticket/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "The ticket", body = TicketResponseDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = TicketService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(TicketResponseDto {
            message: None,
            ticket: ticket.into_dto(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/ticket/edit/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = TicketPayloadDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketResponseDto),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Ticket or event not found", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
    payload: Result<Json<TicketPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let Json(payload) = payload?;
    let params = UpdateTicketParams::from_dto(payload)?;

    let ticket = TicketService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(TicketResponseDto {
            message: Some("Ticket updated successfully".to_string()),
            ticket: ticket.into_dto(),
        }),
    ))
}

/// Cancel a ticket. Also served at the legacy path `/api/v1/ticket/tickets/{id}`.
#[utoipa::path(
    delete,
    path = "/api/v1/ticket/delete/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    identity: BearerIdentity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    if !TicketService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Ticket not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Ticket deleted successfully"))))
}
