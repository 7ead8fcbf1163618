//! Topic data repository.

use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

#[derive(Debug, Clone, Default)]
pub struct TopicChanges {
    pub name: Option<String>,
    pub start_page: Option<Option<i32>>,
    pub end_page: Option<Option<i32>>,
}

pub struct TopicRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TopicRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        start_page: Option<i32>,
        end_page: Option<i32>,
    ) -> Result<entity::topic::Model, DbErr> {
        entity::topic::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            start_page: ActiveValue::Set(start_page),
            end_page: ActiveValue::Set(end_page),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::topic::Model>, DbErr> {
        entity::prelude::Topic::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::topic::Model>, DbErr> {
        entity::prelude::Topic::find()
            .order_by_asc(entity::topic::Column::Name)
            .order_by_asc(entity::topic::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        topic: entity::topic::Model,
        changes: TopicChanges,
    ) -> Result<entity::topic::Model, DbErr> {
        let mut active: entity::topic::ActiveModel = topic.clone().into();

        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(start_page) = changes.start_page {
            active.start_page = ActiveValue::Set(start_page);
        }
        if let Some(end_page) = changes.end_page {
            active.end_page = ActiveValue::Set(end_page);
        }

        if !active.is_changed() {
            return Ok(topic);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Topic::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn get_document_ids(&self, topic_id: i32) -> Result<BTreeSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::TopicDocument::find()
            .select_only()
            .column(entity::topic_document::Column::DocumentId)
            .filter(entity::topic_document::Column::TopicId.eq(topic_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Replaces the documents a topic is found in.
    pub async fn set_documents(
        &self,
        topic_id: i32,
        document_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        let current = self.get_document_ids(topic_id).await?;

        let removed: Vec<i32> = current.difference(document_ids).copied().collect();
        if !removed.is_empty() {
            entity::prelude::TopicDocument::delete_many()
                .filter(entity::topic_document::Column::TopicId.eq(topic_id))
                .filter(entity::topic_document::Column::DocumentId.is_in(removed))
                .exec(self.db)
                .await?;
        }

        let added: Vec<entity::topic_document::ActiveModel> = document_ids
            .difference(&current)
            .map(|document_id| entity::topic_document::ActiveModel {
                topic_id: ActiveValue::Set(topic_id),
                document_id: ActiveValue::Set(*document_id),
            })
            .collect();
        if !added.is_empty() {
            entity::prelude::TopicDocument::insert_many(added)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }
}
