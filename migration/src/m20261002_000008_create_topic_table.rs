use sea_orm_migration::{prelude::*, schema::*};

use super::m20261002_000007_create_document_table::Document;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Topic::Table)
                    .if_not_exists()
                    .col(pk_auto(Topic::Id))
                    .col(string(Topic::Name))
                    .col(integer_null(Topic::StartPage))
                    .col(integer_null(Topic::EndPage))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TopicDocument::Table)
                    .if_not_exists()
                    .col(integer(TopicDocument::TopicId))
                    .col(integer(TopicDocument::DocumentId))
                    .primary_key(
                        Index::create()
                            .col(TopicDocument::TopicId)
                            .col(TopicDocument::DocumentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_document_topic_id")
                            .from(TopicDocument::Table, TopicDocument::TopicId)
                            .to(Topic::Table, Topic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_document_document_id")
                            .from(TopicDocument::Table, TopicDocument::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TopicDocument::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Topic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Topic {
    Table,
    Id,
    Name,
    StartPage,
    EndPage,
}

#[derive(DeriveIden)]
pub enum TopicDocument {
    Table,
    TopicId,
    DocumentId,
}
