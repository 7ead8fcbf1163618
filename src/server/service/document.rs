use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use url::Url;

use crate::{
    model::{api::Lookup, document::DocumentLinkDto},
    server::{
        data::{
            category::CategoryRepository,
            document::{DocumentChanges, DocumentRepository, NewDocument},
            user::UserRepository,
        },
        error::{document::DocumentError, AppError},
        model::{
            document::{
                normalize_category_names, resolve_title, Document, DocumentDownload,
                DocumentFilter, UpdateDocumentParams, UploadDocumentParams,
            },
            page::{Page, Pagination},
        },
        service::resolve::{non_blank, Resolver},
        storage::DocumentStorage,
        util::links::document_download_url,
    },
};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a DocumentStorage,
    app_url: &'a Url,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a DocumentStorage, app_url: &'a Url) -> Self {
        Self {
            db,
            storage,
            app_url,
        }
    }

    /// Stores an uploaded file and records it with its categories.
    ///
    /// The title defaults to the file name up to its first `.`. Titles are unique
    /// ignoring case; a collision reports the conflicting documents.
    ///
    /// # Returns
    /// - `Ok(Document)` - The stored document
    /// - `Err(AppError::DocumentErr)` - No file, no usable title, or a duplicate title
    pub async fn upload(&self, params: UploadDocumentParams) -> Result<Document, AppError> {
        let Some(bytes) = params.bytes else {
            return Err(DocumentError::MissingFile.into());
        };
        let filename = params.filename.unwrap_or_default();
        let title = resolve_title(params.title.as_deref(), &filename)?;

        self.ensure_title_free(&title, params.uploaded_by).await?;

        let file_key = self.storage.save(&bytes, &filename).await?;

        let new = NewDocument {
            title,
            author: params.author.map(|a| a.trim().to_string()).unwrap_or_default(),
            file_key: file_key.clone(),
            original_filename: filename,
            content_type: params
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            size: bytes.len() as i64,
            uploaded_by_id: Some(params.uploaded_by),
        };

        let document = match self.insert(new, &params.categories).await {
            Ok(document) => document,
            Err(err) => {
                if let Err(e) = self.storage.delete(&file_key).await {
                    tracing::warn!("Failed to remove orphaned file {}: {}", file_key, e);
                }
                return Err(err);
            }
        };

        tracing::info!("Uploaded document {} ({})", document.title, document.id);

        load(self.db, self.app_url, document).await
    }

    async fn insert(
        &self,
        new: NewDocument,
        categories: &[String],
    ) -> Result<entity::document::Model, AppError> {
        let txn = self.db.begin().await?;

        let document = DocumentRepository::new(&txn).create(new).await?;
        let category_ids = category_ids(&txn, categories).await?;
        DocumentRepository::new(&txn)
            .set_categories(document.id, &category_ids)
            .await?;

        txn.commit().await?;

        Ok(document)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Document>, AppError> {
        match DocumentRepository::new(self.db).find_by_id(id).await? {
            Some(document) => Ok(Some(load(self.db, self.app_url, document).await?)),
            None => Ok(None),
        }
    }

    /// Gets a page of documents, newest first. An unknown category or uploader yields an
    /// empty page.
    pub async fn get_paginated(
        &self,
        filter: DocumentFilter,
        pagination: Pagination,
    ) -> Result<Page<Document>, AppError> {
        let resolver = Resolver::new(self.db);
        let empty = Page::new(Vec::new(), 0, pagination.page, pagination.per_page);

        let category_id = match &filter.category {
            Some(lookup) => match resolver.category(lookup).await? {
                Some(category) => Some(category.id),
                None => return Ok(empty),
            },
            None => None,
        };
        let uploaded_by_id = match &filter.uploaded_by {
            Some(lookup) => match resolver.user(lookup).await? {
                Some(user) => Some(user.id),
                None => return Ok(empty),
            },
            None => None,
        };

        let (documents, total) = DocumentRepository::new(self.db)
            .get_paginated(category_id, uploaded_by_id, pagination)
            .await?;

        let items = load_all(self.db, self.app_url, documents).await?;

        Ok(Page::new(items, total, pagination.page, pagination.per_page))
    }

    /// Changes title, author or categories. A new title must not collide with another
    /// document's title.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateDocumentParams,
    ) -> Result<Option<Document>, AppError> {
        let txn = self.db.begin().await?;

        let repo = DocumentRepository::new(&txn);
        let Some(document) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let title = match &params.title {
            Some(title) => Some(non_blank(title, "title")?),
            None => None,
        };

        if let Some(title) = &title {
            let taken = repo
                .find_by_title(title)
                .await?
                .into_iter()
                .any(|other| other.id != document.id);
            if taken {
                return Err(AppError::BadRequest(
                    "A document with this title already exists.".to_string(),
                ));
            }
        }

        let categories_changed = params.categories.is_some();
        if let Some(categories) = &params.categories {
            let names = normalize_category_names(categories.iter().map(String::as_str));
            let ids = category_ids(&txn, &names).await?;
            repo.set_categories(document.id, &ids).await?;
        }

        let changes = DocumentChanges {
            title,
            author: params.author.map(|author| author.trim().to_string()),
        };
        let updated = repo.update(document.clone(), changes).await?;
        let updated = if categories_changed && updated.updated_at == document.updated_at {
            repo.touch(updated).await?
        } else {
            updated
        };

        txn.commit().await?;

        Ok(Some(load(self.db, self.app_url, updated).await?))
    }

    /// Deletes a document and its stored file.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = DocumentRepository::new(self.db);

        let Some(document) = repo.find_by_id(id).await? else {
            return Ok(false);
        };

        repo.delete(document.id).await?;
        if let Err(e) = self.storage.delete(&document.file_key).await {
            tracing::warn!(
                "Failed to remove file {} of deleted document {}: {}",
                document.file_key,
                document.id,
                e
            );
        }

        tracing::info!("Deleted document {} ({})", document.title, document.id);

        Ok(true)
    }

    /// Reads a stored document back for download, by id or title.
    pub async fn download(&self, lookup: &Lookup) -> Result<Option<DocumentDownload>, AppError> {
        let Some(document) = Resolver::new(self.db).document(lookup).await? else {
            return Ok(None);
        };

        let bytes = match self.storage.read(&document.file_key).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "File {} of document {} is missing",
                    document.file_key,
                    document.id
                );
                return Err(AppError::not_found("Document file"));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(DocumentDownload {
            filename: document.original_filename,
            content_type: document.content_type,
            bytes,
        }))
    }

    /// Rejects a title already used by another document, naming who uploaded it.
    async fn ensure_title_free(&self, title: &str, uploader_id: i32) -> Result<(), AppError> {
        let existing = DocumentRepository::new(self.db).find_by_title(title).await?;

        let Some(first) = existing.first() else {
            return Ok(());
        };

        let message = match first.uploaded_by_id {
            Some(id) if id == uploader_id => {
                "You have already uploaded a document with the same title.".to_string()
            }
            other => {
                let users = UserRepository::new(self.db).usernames(other).await?;
                let username = users
                    .get(other)
                    .map(|user| user.username)
                    .unwrap_or_else(|| "another user".to_string());
                format!("A document with the same title was uploaded by {}.", username)
            }
        };

        let links = existing
            .iter()
            .map(|document| DocumentLinkDto {
                id: document.id,
                title: document.title.clone(),
                download_url: document_download_url(self.app_url, document.id),
            })
            .collect();

        Err(DocumentError::DuplicateTitle {
            message,
            existing: links,
        }
        .into())
    }
}

/// Matches each name to a category ignoring case, creating the missing ones.
async fn category_ids<C: ConnectionTrait>(
    db: &C,
    names: &[String],
) -> Result<BTreeSet<i32>, AppError> {
    let repo = CategoryRepository::new(db);

    let mut ids = BTreeSet::new();
    for name in names {
        ids.insert(repo.find_or_create(name).await?.id);
    }

    Ok(ids)
}

async fn load<C: ConnectionTrait>(
    db: &C,
    app_url: &Url,
    document: entity::document::Model,
) -> Result<Document, AppError> {
    let mut documents = load_all(db, app_url, vec![document]).await?;

    documents
        .pop()
        .ok_or_else(|| AppError::InternalError("Loaded document went missing".to_string()))
}

async fn load_all<C: ConnectionTrait>(
    db: &C,
    app_url: &Url,
    documents: Vec<entity::document::Model>,
) -> Result<Vec<Document>, AppError> {
    let mut categories = DocumentRepository::new(db)
        .categories_for(documents.iter().map(|document| document.id).collect())
        .await?;
    let users = UserRepository::new(db)
        .usernames(documents.iter().filter_map(|document| document.uploaded_by_id))
        .await?;

    Ok(documents
        .into_iter()
        .map(|document| Document {
            download_url: document_download_url(app_url, document.id),
            categories: categories.remove(&document.id).unwrap_or_default(),
            uploaded_by: users.get(document.uploaded_by_id),
            id: document.id,
            title: document.title,
            author: document.author,
            original_filename: document.original_filename,
            content_type: document.content_type,
            size: document.size,
            file_key: document.file_key,
            created_at: document.created_at,
            updated_at: document.updated_at,
        })
        .collect())
}
