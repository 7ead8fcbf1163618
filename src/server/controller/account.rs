use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        account::{AccountDto, RegisterAccountDto, TokenDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::user::{RegisterParams, User},
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Register an account and issue its bearer token.
///
/// # Returns
/// - `201 Created` - The account and its token
/// - `400 Bad Request` - Blank or taken username
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    request_body = RegisterAccountDto,
    responses(
        (status = 201, description = "Successfully registered account", body = TokenDto),
        (status = 400, description = "Invalid or taken username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AccountService::new(&state.db);

    let issued = service
        .register(RegisterParams {
            username: payload.username,
            email: payload.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(issued.into_dto())))
}

/// Get the account the bearer token belongs to.
#[utoipa::path(
    get,
    path = "/api/accounts/me",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "The calling account", body = AccountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).authenticate().await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}

/// Replace the caller's bearer token. The old token stops working immediately.
#[utoipa::path(
    post,
    path = "/api/accounts/token",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Newly issued token", body = TokenDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn rotate_token(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).authenticate().await?;

    let service = AccountService::new(&state.db);

    let issued = service.rotate_token(user).await?;

    Ok((StatusCode::OK, Json(issued.into_dto())))
}
