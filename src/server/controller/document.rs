use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        document::{
            DocumentDto, DocumentQuery, DuplicateDocumentDto, PaginatedDocumentsDto,
            UpdateDocumentDto, UploadDocumentForm,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            document::{
                parse_category_names, DocumentDownload, DocumentFilter, UpdateDocumentParams,
                UploadDocumentParams,
            },
            page::Pagination,
        },
        service::document::DocumentService,
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// Upload a document.
///
/// Accepts a multipart form with a `file` part and optional `title`, `author` and
/// comma-separated `categories` parts. Unknown categories are created. The title
/// defaults to the file name up to its first `.` and must be unique ignoring case.
///
/// # Returns
/// - `201 Created` - The stored document
/// - `400 Bad Request` - No file, no usable title, or duplicate title (with the conflicting documents)
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body(content = UploadDocumentForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully uploaded document", body = DocumentDto),
        (status = 400, description = "Invalid upload or duplicate title", body = DuplicateDocumentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn upload_document(
    State(state): State<AppState>,
    token: BearerToken,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let mut params = UploadDocumentParams::new(user.id);

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("file") => {
                params.filename = field.file_name().map(str::to_string);
                params.content_type = field.content_type().map(str::to_string);
                params.bytes = Some(field.bytes().await?.to_vec());
            }
            Some("title") => params.title = Some(field.text().await?),
            Some("author") => params.author = Some(field.text().await?),
            Some("categories") => params.categories = parse_category_names(&field.text().await?),
            _ => {}
        }
    }

    let service = DocumentService::new(&state.db, &state.storage, &state.app_url);

    let document = service.upload(params).await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// List documents newest first, one page at a time.
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    params(DocumentQuery),
    responses(
        (status = 200, description = "Successfully retrieved documents", body = PaginatedDocumentsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.db, &state.storage, &state.app_url);

    let filter = DocumentFilter {
        category: query.category.as_deref().map(Lookup::parse),
        uploaded_by: query.uploaded_by.as_deref().map(Lookup::parse),
    };

    let page = service
        .get_paginated(filter, Pagination::new(query.page, query.entries))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Successfully retrieved document", body = DocumentDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.db, &state.storage, &state.app_url);

    match service.get_by_id(id).await? {
        Some(document) => Ok((StatusCode::OK, Json(document.into_dto()))),
        None => Err(AppError::not_found("Document")),
    }
}

/// Update a document's title, author or categories.
///
/// # Access Control
/// - `DocumentOwner` - Caller must have uploaded the document
#[utoipa::path(
    patch,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = UpdateDocumentDto,
    responses(
        (status = 200, description = "Successfully updated document", body = DocumentDto),
        (status = 400, description = "Invalid or duplicate title", body = DuplicateDocumentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller did not upload this document", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_document(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.db, &state.storage, &state.app_url);

    if service.get_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Document"));
    }

    AuthGuard::new(&state.db, &token)
        .require(&[Permission::DocumentOwner(id)])
        .await?;

    match service.update(id, UpdateDocumentParams::from(payload)).await? {
        Some(document) => Ok((StatusCode::OK, Json(document.into_dto()))),
        None => Err(AppError::not_found("Document")),
    }
}

/// Delete a document and its stored file.
///
/// # Access Control
/// - `DocumentOwner` - Caller must have uploaded the document
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Successfully deleted document"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller did not upload this document", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_document(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.db, &state.storage, &state.app_url);

    if service.get_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Document"));
    }

    AuthGuard::new(&state.db, &token)
        .require(&[Permission::DocumentOwner(id)])
        .await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Document"))
    }
}

/// Download the stored file of a document as an attachment.
#[utoipa::path(
    get,
    path = "/api/documents/{id}/download",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "The stored file", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 404, description = "Document or its file not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    download(&state, &Lookup::Id(id)).await
}

/// Download a document by its title, ignoring case.
#[utoipa::path(
    get,
    path = "/api/documents/by-title/{title}/download",
    tag = DOCUMENT_TAG,
    params(("title" = String, Path, description = "Document title")),
    responses(
        (status = 200, description = "The stored file", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 404, description = "Document or its file not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_document_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    download(&state, &Lookup::Name(title)).await
}

async fn download(state: &AppState, lookup: &Lookup) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.db, &state.storage, &state.app_url);

    match service.download(lookup).await? {
        Some(file) => Ok(attachment(file)),
        None => Err(AppError::not_found("Document")),
    }
}

fn attachment(file: DocumentDownload) -> impl IntoResponse {
    let filename = file.filename.replace(['"', '\\', '\r', '\n'], "_");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        file.bytes,
    )
}
