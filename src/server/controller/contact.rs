use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        contact::{ContactListDto, ContactPayloadDto, ContactResponseDto},
    },
    server::{
        error::AppError,
        model::contact::{CreateContactParams, UpdateContactParams},
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contacts";

/// Submit a contact message.
///
/// Open to anyone. Responds with 200 rather than 201.
#[utoipa::path(
    post,
    path = "/api/v1/contacts/create",
    tag = CONTACT_TAG,
    request_body = ContactPayloadDto,
    responses(
        (status = 200, description = "Contact message stored", body = ContactResponseDto),
        (status = 400, description = "Invalid contact data", body = ErrorDto)
    ),
)]
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateContactParams::from_dto(payload)?;

    let contact = ContactService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::OK,
        Json(ContactResponseDto {
            message: Some("Contact created successfully".to_string()),
            contact: contact.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    tag = CONTACT_TAG,
    responses(
        (status = 200, description = "All contact messages", body = ContactListDto)
    ),
)]
pub async fn get_contacts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let contacts = ContactService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ContactListDto {
            contacts: contacts.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "The contact message", body = ContactResponseDto),
        (status = 404, description = "Contact not found", body = ErrorDto)
    ),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let contact = ContactService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ContactResponseDto {
            message: None,
            contact: contact.into_dto(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/contacts/edit/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = ContactPayloadDto,
    responses(
        (status = 200, description = "Contact updated", body = ContactResponseDto),
        (status = 400, description = "Invalid contact data", body = ErrorDto),
        (status = 404, description = "Contact not found", body = ErrorDto)
    ),
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<ContactPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = UpdateContactParams::from_dto(payload)?;

    let contact = ContactService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ContactResponseDto {
            message: Some("Contact updated successfully".to_string()),
            contact: contact.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/contacts/delete/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted", body = MessageDto),
        (status = 404, description = "Contact not found", body = ErrorDto)
    ),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !ContactService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Contact not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Contact deleted successfully"))))
}
