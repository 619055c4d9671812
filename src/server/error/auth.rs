use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The `Authorization` header was malformed, or the token failed signature or
    /// expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token was valid but the user it names no longer exists.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User {0} referenced by token does not exist")]
    UserNotFound(i32),

    /// User lacks the role or ownership required for the operation.
    ///
    /// The message is returned to the client. Results in a 400 Bad Request response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password on login.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `UserNotFound` → 400 Bad Request with "User not found"
/// - `AccessDenied` → 400 Bad Request with the denial reason
/// - `InvalidCredentials` → 400 Bad Request with "Invalid email or password"
///
/// All errors are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Missing authorization token")),
            )
                .into_response(),
            Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid or expired token")),
            )
                .into_response(),
            Self::UserNotFound(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("User not found"))).into_response()
            }
            Self::AccessDenied(_, reason) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(format!("Access forbidden: {}", reason))),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("Invalid email or password")),
            )
                .into_response(),
        }
    }
}
