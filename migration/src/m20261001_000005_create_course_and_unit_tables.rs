use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User, m20261001_000004_create_department_table::Department,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Name))
                    .col(integer(Course::DepartmentId))
                    .col(integer_null(Course::CreatedById))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_department_id")
                            .from(Course::Table, Course::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_created_by_id")
                            .from(Course::Table, Course::CreatedById)
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
                    .table(Unit::Table)
                    .if_not_exists()
                    .col(pk_auto(Unit::Id))
                    .col(string(Unit::Name))
                    .col(integer(Unit::CourseId))
                    .col(integer_null(Unit::CreatedById))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_unit_course_id")
                            .from(Unit::Table, Unit::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_unit_created_by_id")
                            .from(Unit::Table, Unit::CreatedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Unit::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Name,
    DepartmentId,
    CreatedById,
}

#[derive(DeriveIden)]
pub enum Unit {
    Table,
    Id,
    Name,
    CourseId,
    CreatedById,
}
