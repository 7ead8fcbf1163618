use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DocumentDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub original_filename: String,
    pub content_type: String,
    pub size: i64,
    pub uploaded_by: Option<String>,
    pub categories: Vec<String>,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Multipart form accepted by the upload endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Defaults to the file name up to its first `.`
    pub title: Option<String>,
    pub author: Option<String>,
    /// Comma-separated category names
    pub categories: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateDocumentDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Replaces the category list when present
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct DocumentLinkDto {
    pub id: i32,
    pub title: String,
    pub download_url: String,
}

/// Body returned when an upload collides with an existing title.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DuplicateDocumentDto {
    pub error: String,
    pub existing_documents: Vec<DocumentLinkDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaginatedDocumentsDto {
    pub documents: Vec<DocumentDto>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
    pub total_pages: u64,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct DocumentQuery {
    /// Category id or name
    pub category: Option<String>,
    /// Uploader id or username
    pub uploaded_by: Option<String>,
    /// Page number (default: 0)
    pub page: Option<u64>,
    /// Items per page (default: 10)
    pub entries: Option<u64>,
}
