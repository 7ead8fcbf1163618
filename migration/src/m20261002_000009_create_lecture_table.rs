use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000005_create_course_and_unit_tables::Unit,
    m20261002_000006_create_lecturer_table::Lecturer,
    m20261002_000007_create_document_table::Document,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lecture::Table)
                    .if_not_exists()
                    .col(pk_auto(Lecture::Id))
                    .col(integer(Lecture::LecturerId))
                    .col(integer(Lecture::UnitId))
                    .col(string(Lecture::Name))
                    .col(date(Lecture::Date))
                    .col(time(Lecture::StartTime))
                    .col(time(Lecture::EndTime))
                    .col(text(Lecture::Comments).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_lecturer_id")
                            .from(Lecture::Table, Lecture::LecturerId)
                            .to(Lecturer::Table, Lecturer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_unit_id")
                            .from(Lecture::Table, Lecture::UnitId)
                            .to(Unit::Table, Unit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lecture_lecturer_unit_name_date")
                    .table(Lecture::Table)
                    .col(Lecture::LecturerId)
                    .col(Lecture::UnitId)
                    .col(Lecture::Name)
                    .col(Lecture::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LectureDocument::Table)
                    .if_not_exists()
                    .col(integer(LectureDocument::LectureId))
                    .col(integer(LectureDocument::DocumentId))
                    .primary_key(
                        Index::create()
                            .col(LectureDocument::LectureId)
                            .col(LectureDocument::DocumentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_document_lecture_id")
                            .from(LectureDocument::Table, LectureDocument::LectureId)
                            .to(Lecture::Table, Lecture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_document_document_id")
                            .from(LectureDocument::Table, LectureDocument::DocumentId)
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
            .drop_table(Table::drop().table(LectureDocument::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lecture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lecture {
    Table,
    Id,
    LecturerId,
    UnitId,
    Name,
    Date,
    StartTime,
    EndTime,
    Comments,
}

#[derive(DeriveIden)]
pub enum LectureDocument {
    Table,
    LectureId,
    DocumentId,
}
