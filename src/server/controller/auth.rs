use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginResponseDto, UserPayloadDto, UserResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerIdentity},
        model::user::{LoginParams, RegisterUserParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Open to anyone. Registering an account with the `admin` role requires the request to
/// carry an admin bearer token.
///
/// # Returns
/// - `201 Created` - The created account
/// - `400 Bad Request` - Invalid payload, duplicate email or admin role without admin token
/// - `401 Unauthorized` - A bearer token was sent but is invalid
#[utoipa::path(
    post,
    path = "/api/v1/user/register",
    tag = AUTH_TAG,
    request_body = UserPayloadDto,
    responses(
        (status = 201, description = "Account created", body = UserResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    identity: Option<BearerIdentity>,
    payload: Result<Json<UserPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = match &identity {
        Some(identity) => Some(AuthGuard::new(&state.db, identity).require(&[]).await?),
        None => None,
    };

    let Json(payload) = payload?;
    let params = RegisterUserParams::from_dto(payload)?;

    let user = AuthService::new(&state.db)
        .register(params, caller.as_ref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponseDto {
            message: Some("User created successfully".to_string()),
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// Issues a bearer token for the account.
///
/// # Returns
/// - `200 OK` - Account and access token
/// - `400 Bad Request` - Missing fields or invalid credentials
#[utoipa::path(
    post,
    path = "/api/v1/user/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Missing fields or invalid credentials", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = LoginParams::from_dto(payload)?;

    let user = AuthService::new(&state.db)
        .login(params, state.admin_bootstrap.as_ref())
        .await?;

    let access_token = state.tokens.issue(user.id)?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "User logged in successfully".to_string(),
            user: user.into_dto(),
            access_token,
        }),
    ))
}
