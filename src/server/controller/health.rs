use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report whether the server can reach its database.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server and database are up", body = MessageDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "ok".to_string(),
        }),
    ))
}
