use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string_uniq(Category::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(string_uniq(Document::Title))
                    .col(string(Document::FileKey))
                    .col(string(Document::OriginalFilename))
                    .col(string(Document::ContentType))
                    .col(big_integer(Document::Size))
                    .col(string(Document::Author).default(""))
                    .col(integer_null(Document::UploadedById))
                    .col(timestamp_with_time_zone(Document::CreatedAt))
                    .col(timestamp_with_time_zone(Document::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_uploaded_by_id")
                            .from(Document::Table, Document::UploadedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DocumentCategory::Table)
                    .if_not_exists()
                    .col(integer(DocumentCategory::DocumentId))
                    .col(integer(DocumentCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(DocumentCategory::DocumentId)
                            .col(DocumentCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_category_document_id")
                            .from(DocumentCategory::Table, DocumentCategory::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_category_category_id")
                            .from(DocumentCategory::Table, DocumentCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    Title,
    FileKey,
    OriginalFilename,
    ContentType,
    Size,
    Author,
    UploadedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum DocumentCategory {
    Table,
    DocumentId,
    CategoryId,
}
