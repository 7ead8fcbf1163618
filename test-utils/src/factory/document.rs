//! Document and category factories.
//!
//! Documents created here only exist as rows; no file is written to a media root.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test documents.
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author: String,
    uploaded_by_id: Option<i32>,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a new DocumentFactory titled `"Document {id}"` with no uploader.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Document {}", id),
            author: String::new(),
            uploaded_by_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn uploaded_by(mut self, user_id: Option<i32>) -> Self {
        self.uploaded_by_id = user_id;
        self
    }

    /// Builds and inserts the document row.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let now = Utc::now();
        let key = format!("test-{}", next_id());

        entity::document::ActiveModel {
            original_filename: ActiveValue::Set(format!("{}.pdf", self.title)),
            title: ActiveValue::Set(self.title),
            file_key: ActiveValue::Set(format!("documents/{}.pdf", key)),
            content_type: ActiveValue::Set("application/pdf".to_string()),
            size: ActiveValue::Set(0),
            author: ActiveValue::Set(self.author),
            uploaded_by_id: ActiveValue::Set(self.uploaded_by_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a document uploaded by `uploaded_by`.
pub async fn create_document(
    db: &DatabaseConnection,
    uploaded_by: i32,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db)
        .uploaded_by(Some(uploaded_by))
        .build()
        .await
}

/// Creates a category with the provided name.
pub async fn create_category(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::category::Model, DbErr> {
    entity::category::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
