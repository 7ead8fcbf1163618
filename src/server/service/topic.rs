use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        document::DocumentRepository,
        topic::{TopicChanges, TopicRepository},
    },
    error::AppError,
    model::topic::{validate_pages, CreateTopicParams, Topic, UpdateTopicParams},
    service::resolve::{non_blank, Resolver},
};

pub struct TopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTopicParams) -> Result<Topic, AppError> {
        let name = non_blank(&params.name, "name")?;
        validate_pages(params.start_page, params.end_page)?;

        let txn = self.db.begin().await?;

        let document_ids = Resolver::new(&txn).document_ids(&params.documents).await?;

        let repo = TopicRepository::new(&txn);
        let topic = repo
            .create(&name, params.start_page, params.end_page)
            .await?;
        repo.set_documents(topic.id, &document_ids).await?;

        txn.commit().await?;

        tracing::info!("Created topic {} ({})", topic.name, topic.id);

        load(self.db, topic).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Topic>, AppError> {
        match TopicRepository::new(self.db).find_by_id(id).await? {
            Some(topic) => Ok(Some(load(self.db, topic).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Topic>, AppError> {
        let topics = TopicRepository::new(self.db).get_all().await?;

        let mut items = Vec::with_capacity(topics.len());
        for topic in topics {
            items.push(load(self.db, topic).await?);
        }

        Ok(items)
    }

    /// Applies a partial update. The page range is validated after merging with the
    /// stored values.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTopicParams,
    ) -> Result<Option<Topic>, AppError> {
        let txn = self.db.begin().await?;

        let repo = TopicRepository::new(&txn);
        let Some(topic) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let name = params
            .name
            .as_deref()
            .map(|name| non_blank(name, "name"))
            .transpose()?;

        validate_pages(
            params.start_page.unwrap_or(topic.start_page),
            params.end_page.unwrap_or(topic.end_page),
        )?;

        if let Some(documents) = &params.documents {
            let document_ids = Resolver::new(&txn).document_ids(documents).await?;
            repo.set_documents(topic.id, &document_ids).await?;
        }

        let topic = repo
            .update(
                topic,
                TopicChanges {
                    name,
                    start_page: params.start_page,
                    end_page: params.end_page,
                },
            )
            .await?;

        txn.commit().await?;

        Ok(Some(load(self.db, topic).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = TopicRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted topic {}", id);

        Ok(true)
    }
}

async fn load<C: ConnectionTrait>(db: &C, topic: entity::topic::Model) -> Result<Topic, AppError> {
    let document_ids: Vec<i32> = TopicRepository::new(db)
        .get_document_ids(topic.id)
        .await?
        .into_iter()
        .collect();
    let documents = DocumentRepository::new(db).refs(document_ids).await?;

    Ok(Topic {
        id: topic.id,
        name: topic.name,
        start_page: topic.start_page,
        end_page: topic.end_page,
        documents,
    })
}
