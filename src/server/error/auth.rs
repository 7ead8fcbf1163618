use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header, or one that is not a bearer token.
    #[error("Request did not carry an authentication token")]
    MissingToken,

    /// Token does not belong to any account.
    #[error("Authentication token is not recognized")]
    InvalidToken,

    /// Authenticated user lacks the permission required for the action.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Message returned to the client naming the required role
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with the role-naming message
///
/// Denials are logged at debug level with the user id.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication credentials were not provided.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid token.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, message) => {
                tracing::debug!(user_id, "{}", message);

                (StatusCode::FORBIDDEN, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}
