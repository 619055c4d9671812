use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        donation::{DonationListDto, DonationPayloadDto, DonationResponseDto},
    },
    server::{
        error::AppError,
        model::donation::{CreateDonationParams, UpdateDonationParams},
        service::donation::DonationService,
        state::AppState,
    },
};

/// Tag for grouping donation endpoints in OpenAPI documentation
pub static DONATION_TAG: &str = "donation";

/// Record a donation.
///
/// Open to anyone; `user_id` must reference an existing account.
#[utoipa::path(
    post,
    path = "/api/v1/donation/create",
    tag = DONATION_TAG,
    request_body = DonationPayloadDto,
    responses(
        (status = 201, description = "Donation recorded", body = DonationResponseDto),
        (status = 400, description = "Invalid donation data or unknown user", body = ErrorDto)
    ),
)]
pub async fn create_donation(
    State(state): State<AppState>,
    payload: Result<Json<DonationPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateDonationParams::from_dto(payload)?;

    let donation = DonationService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(DonationResponseDto {
            message: Some("Donation created successfully".to_string()),
            donation: donation.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/donation",
    tag = DONATION_TAG,
    responses(
        (status = 200, description = "All donations", body = DonationListDto)
    ),
)]
pub async fn get_donations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let donations = DonationService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(DonationListDto {
            donations: donations.into_iter().map(|d| d.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/donation/{id}",
    tag = DONATION_TAG,
    params(("id" = i32, Path, description = "Donation ID")),
    responses(
        (status = 200, description = "The donation", body = DonationResponseDto),
        (status = 404, description = "Donation not found", body = ErrorDto)
    ),
)]
pub async fn get_donation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let donation = DonationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Donation not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(DonationResponseDto {
            message: None,
            donation: donation.into_dto(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/donation/edit/{id}",
    tag = DONATION_TAG,
    params(("id" = i32, Path, description = "Donation ID")),
    request_body = DonationPayloadDto,
    responses(
        (status = 200, description = "Donation updated", body = DonationResponseDto),
        (status = 400, description = "Invalid donation data", body = ErrorDto),
        (status = 404, description = "Donation not found", body = ErrorDto)
    ),
)]
pub async fn update_donation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<DonationPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = UpdateDonationParams::from_dto(payload)?;

    let donation = DonationService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Donation not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(DonationResponseDto {
            message: Some("Donation updated successfully".to_string()),
            donation: donation.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/donation/delete/{id}",
    tag = DONATION_TAG,
    params(("id" = i32, Path, description = "Donation ID")),
    responses(
        (status = 200, description = "Donation deleted", body = MessageDto),
        (status = 404, description = "Donation not found", body = ErrorDto)
    ),
)]
pub async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !DonationService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Donation not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Donation deleted successfully"))))
}
