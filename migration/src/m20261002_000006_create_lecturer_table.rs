use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User,
    m20261001_000002_create_institution_table::Institution,
    m20261001_000004_create_department_table::Department,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lecturer::Table)
                    .if_not_exists()
                    .col(pk_auto(Lecturer::Id))
                    .col(integer_uniq(Lecturer::UserId))
                    .col(integer_null(Lecturer::InstitutionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecturer_user_id")
                            .from(Lecturer::Table, Lecturer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecturer_institution_id")
                            .from(Lecturer::Table, Lecturer::InstitutionId)
                            .to(Institution::Table, Institution::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LecturerDepartment::Table)
                    .if_not_exists()
                    .col(integer(LecturerDepartment::LecturerId))
                    .col(integer(LecturerDepartment::DepartmentId))
                    .primary_key(
                        Index::create()
                            .col(LecturerDepartment::LecturerId)
                            .col(LecturerDepartment::DepartmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecturer_department_lecturer_id")
                            .from(LecturerDepartment::Table, LecturerDepartment::LecturerId)
                            .to(Lecturer::Table, Lecturer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecturer_department_department_id")
                            .from(LecturerDepartment::Table, LecturerDepartment::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LecturerDepartment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lecturer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lecturer {
    Table,
    Id,
    UserId,
    InstitutionId,
}

#[derive(DeriveIden)]
pub enum LecturerDepartment {
    Table,
    LecturerId,
    DepartmentId,
}
