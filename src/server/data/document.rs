//! Document data repository.

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::filter::iequals,
    model::{page::Pagination, reference::NamedRef},
};

/// Column values for a newly stored document.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub author: String,
    pub file_key: String,
    pub original_filename: String,
    pub content_type: String,
    pub size: i64,
    pub uploaded_by_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentChanges {
    pub title: Option<String>,
    pub author: Option<String>,
}

pub struct DocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewDocument) -> Result<entity::document::Model, DbErr> {
        let now = Utc::now();

        entity::document::ActiveModel {
            title: ActiveValue::Set(new.title),
            author: ActiveValue::Set(new.author),
            file_key: ActiveValue::Set(new.file_key),
            original_filename: ActiveValue::Set(new.original_filename),
            content_type: ActiveValue::Set(new.content_type),
            size: ActiveValue::Set(new.size),
            uploaded_by_id: ActiveValue::Set(new.uploaded_by_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id).one(self.db).await
    }

    /// Finds documents whose title matches, ignoring case.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(iequals(
                entity::prelude::Document,
                entity::document::Column::Title,
                title,
            ))
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a page of documents, newest first.
    ///
    /// # Arguments
    /// - `category_id` - Only documents tagged with this category
    /// - `uploaded_by_id` - Only documents uploaded by this user
    /// - `pagination` - Page to fetch
    ///
    /// # Returns
    /// - `Ok((Vec<Model>, u64))` - The requested page and the total matching count
    pub async fn get_paginated(
        &self,
        category_id: Option<i32>,
        uploaded_by_id: Option<i32>,
        pagination: Pagination,
    ) -> Result<(Vec<entity::document::Model>, u64), DbErr> {
        let mut query = entity::prelude::Document::find()
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id);

        if let Some(category_id) = category_id {
            let document_ids: Vec<i32> = entity::prelude::DocumentCategory::find()
                .select_only()
                .column(entity::document_category::Column::DocumentId)
                .filter(entity::document_category::Column::CategoryId.eq(category_id))
                .into_tuple()
                .all(self.db)
                .await?;

            query = query.filter(entity::document::Column::Id.is_in(document_ids));
        }
        if let Some(uploaded_by_id) = uploaded_by_id {
            query = query.filter(entity::document::Column::UploadedById.eq(uploaded_by_id));
        }

        let paginator = query.paginate(self.db, pagination.per_page);
        let total = paginator.num_items().await?;
        let documents = paginator.fetch_page(pagination.page).await?;

        Ok((documents, total))
    }

    /// Gets every document uploaded by the user, newest first.
    pub async fn get_by_uploader(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::UploadedById.eq(user_id))
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::document::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Document::find()
            .filter(entity::document::Column::Id.is_in(ids))
            .order_by_asc(entity::document::Column::Title)
            .all(self.db)
            .await
    }

    /// Updates the given columns and bumps `updated_at`.
    pub async fn update(
        &self,
        document: entity::document::Model,
        changes: DocumentChanges,
    ) -> Result<entity::document::Model, DbErr> {
        let mut active: entity::document::ActiveModel = document.clone().into();

        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(author) = changes.author {
            active.author = ActiveValue::Set(author);
        }

        if !active.is_changed() {
            return Ok(document);
        }

        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Bumps `updated_at` without touching other columns.
    pub async fn touch(
        &self,
        document: entity::document::Model,
    ) -> Result<entity::document::Model, DbErr> {
        let mut active: entity::document::ActiveModel = document.into();
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets category names for each document, sorted by name.
    pub async fn categories_for(
        &self,
        document_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if document_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links: Vec<(i32, i32)> = entity::prelude::DocumentCategory::find()
            .select_only()
            .column(entity::document_category::Column::DocumentId)
            .column(entity::document_category::Column::CategoryId)
            .filter(entity::document_category::Column::DocumentId.is_in(document_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        let category_ids: Vec<i32> = links
            .iter()
            .map(|(_, category_id)| *category_id)
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect();

        let names: HashMap<i32, String> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|category| (category.id, category.name))
                .collect()
        };

        let mut categories: HashMap<i32, Vec<String>> = HashMap::new();
        for (document_id, category_id) in links {
            if let Some(name) = names.get(&category_id) {
                categories
                    .entry(document_id)
                    .or_default()
                    .push(name.clone());
            }
        }
        for names in categories.values_mut() {
            names.sort();
        }

        Ok(categories)
    }

    pub async fn get_category_ids(&self, document_id: i32) -> Result<BTreeSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::DocumentCategory::find()
            .select_only()
            .column(entity::document_category::Column::CategoryId)
            .filter(entity::document_category::Column::DocumentId.eq(document_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Replaces the categories of a document.
    pub async fn set_categories(
        &self,
        document_id: i32,
        category_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        let current = self.get_category_ids(document_id).await?;

        let removed: Vec<i32> = current.difference(category_ids).copied().collect();
        if !removed.is_empty() {
            entity::prelude::DocumentCategory::delete_many()
                .filter(entity::document_category::Column::DocumentId.eq(document_id))
                .filter(entity::document_category::Column::CategoryId.is_in(removed))
                .exec(self.db)
                .await?;
        }

        let added: Vec<entity::document_category::ActiveModel> = category_ids
            .difference(&current)
            .map(|category_id| entity::document_category::ActiveModel {
                document_id: ActiveValue::Set(document_id),
                category_id: ActiveValue::Set(*category_id),
            })
            .collect();
        if !added.is_empty() {
            entity::prelude::DocumentCategory::insert_many(added)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Gets document titles by id, for references in lectures and topics.
    pub async fn refs(&self, ids: Vec<i32>) -> Result<Vec<NamedRef>, DbErr> {
        Ok(self
            .get_by_ids(ids)
            .await?
            .into_iter()
            .map(|document| NamedRef::new(document.id, document.title))
            .collect())
    }
}
