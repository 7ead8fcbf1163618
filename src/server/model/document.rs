//! Domain & parameter models for document operations.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::Lookup,
        document::{DocumentDto, PaginatedDocumentsDto, UpdateDocumentDto},
    },
    server::{
        error::document::DocumentError,
        model::{page::Page, reference::UserRef},
    },
};

#[derive(Debug, Clone)]
pub struct Document {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub original_filename: String,
    pub content_type: String,
    pub size: i64,
    pub file_key: String,
    pub uploaded_by: Option<UserRef>,
    pub categories: Vec<String>,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            title: self.title,
            author: self.author,
            original_filename: self.original_filename,
            content_type: self.content_type,
            size: self.size,
            uploaded_by: self.uploaded_by.map(|user| user.username),
            categories: self.categories,
            download_url: self.download_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<Document> {
    pub fn into_dto(self) -> PaginatedDocumentsDto {
        PaginatedDocumentsDto {
            total: self.total,
            page: self.page,
            entries: self.per_page,
            total_pages: self.total_pages,
            documents: self.items.into_iter().map(Document::into_dto).collect(),
        }
    }
}

/// Bytes of a stored document ready to be streamed back.
#[derive(Debug)]
pub struct DocumentDownload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Parameters collected from a multipart upload.
#[derive(Debug, Clone, Default)]
pub struct UploadDocumentParams {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Option<Vec<u8>>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<String>,
    pub uploaded_by: i32,
}

impl UploadDocumentParams {
    pub fn new(uploaded_by: i32) -> Self {
        Self {
            uploaded_by,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDocumentParams {
    pub title: Option<String>,
    pub author: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl From<UpdateDocumentDto> for UpdateDocumentParams {
    fn from(dto: UpdateDocumentDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
            categories: dto.categories,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub category: Option<Lookup>,
    pub uploaded_by: Option<Lookup>,
}

/// Picks the stored title: the explicit one, else the file name up to its first `.`.
pub fn resolve_title(title: Option<&str>, filename: &str) -> Result<String, DocumentError> {
    if let Some(title) = title.map(str::trim).filter(|title| !title.is_empty()) {
        return Ok(title.to_string());
    }

    let stem = filename.split('.').next().unwrap_or_default().trim();
    if stem.is_empty() {
        return Err(DocumentError::MissingTitle);
    }

    Ok(stem.to_string())
}

/// Splits a comma-separated category list, trimming names and dropping blanks and
/// case-insensitive repeats.
pub fn parse_category_names(raw: &str) -> Vec<String> {
    normalize_category_names(raw.split(','))
}

/// Trims names and drops blanks and case-insensitive repeats, keeping first spelling.
pub fn normalize_category_names<'a, I: IntoIterator<Item = &'a str>>(names: I) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();

    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_defaults_to_filename_stem() {
        assert_eq!(resolve_title(None, "notes.final.pdf").unwrap(), "notes");
        assert_eq!(resolve_title(Some("  "), "syllabus.docx").unwrap(), "syllabus");
    }

    #[test]
    fn explicit_title_wins() {
        assert_eq!(
            resolve_title(Some("Week 1 Notes"), "w1.pdf").unwrap(),
            "Week 1 Notes"
        );
    }

    #[test]
    fn missing_filename_and_title_is_rejected() {
        assert!(matches!(
            resolve_title(None, ""),
            Err(DocumentError::MissingTitle)
        ));
        assert!(matches!(
            resolve_title(None, ".hidden"),
            Err(DocumentError::MissingTitle)
        ));
    }

    #[test]
    fn category_names_are_trimmed_and_deduplicated() {
        let names = parse_category_names(" Maths, ,physics,maths ,Chemistry");

        assert_eq!(names, vec!["Maths", "physics", "Chemistry"]);
    }
}
