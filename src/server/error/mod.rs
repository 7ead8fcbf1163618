//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod document;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, document::DocumentError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` and
/// `DocumentError` handle their own response mapping, while generic variants provide
/// standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Document upload validation error.
    ///
    /// Delegates to `DocumentError::into_response()`, always a 400 Bad Request.
    #[error(transparent)]
    DocumentErr(#[from] DocumentError),

    /// Database operation error from SeaORM.
    ///
    /// Constraint violations become 400 Bad Request, a missing record 404 Not Found,
    /// everything else 500 Internal Server Error logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Filesystem error from the document store.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed multipart body.
    ///
    /// Results in 400 Bad Request with the parser's message.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for a 404 naming the missing resource.
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("{} not found.", resource))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `MultipartErr`, and constraint violations
/// - 404 Not Found - For `NotFound` and `DbErr::RecordNotFound`
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr` and `DocumentErr`, delegated to their own conversions
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::DocumentErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::MultipartErr(err) => (
                err.status(),
                Json(ErrorDto {
                    error: err.body_text(),
                }),
            )
                .into_response(),
            Self::DbErr(err) => db_error_response(err),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Maps constraint violations that slipped past service-level checks to client errors.
fn db_error_response(err: DbErr) -> Response {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violation: {}", detail);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "A record with the same unique values already exists.".to_string(),
                }),
            )
                .into_response()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key violation: {}", detail);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "A referenced record does not exist.".to_string(),
                }),
            )
                .into_response()
        }
        _ => match err {
            DbErr::RecordNotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        },
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
