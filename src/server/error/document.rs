use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{
    api::ErrorDto,
    document::{DocumentLinkDto, DuplicateDocumentDto},
};

#[derive(Error, Debug)]
pub enum DocumentError {
    /// The multipart form had no `file` part.
    #[error("No file was submitted.")]
    MissingFile,

    /// No title was given and none could be derived from the file name.
    #[error("A title is required when the uploaded file has no name.")]
    MissingTitle,

    /// Another document already uses the requested title.
    ///
    /// # Fields
    /// - `message` - Client-facing message, naming the other uploader when it is not the caller
    /// - `existing` - Links to the conflicting documents
    #[error("{message}")]
    DuplicateTitle {
        message: String,
        existing: Vec<DocumentLinkDto>,
    },
}

/// Converts document errors into 400 Bad Request responses.
///
/// Duplicate titles add an `existing_documents` array to the usual error body.
impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicateTitle { message, existing } => (
                StatusCode::BAD_REQUEST,
                Json(DuplicateDocumentDto {
                    error: message,
                    existing_documents: existing,
                }),
            )
                .into_response(),
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
