use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User, m20261001_000003_create_school_table::School,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(pk_auto(Department::Id))
                    .col(string(Department::Name))
                    .col(integer(Department::SchoolId))
                    .col(integer_null(Department::HeadId))
                    .col(integer_null(Department::SecretaryId))
                    .col(integer_null(Department::CreatedById))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_school_id")
                            .from(Department::Table, Department::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_head_id")
                            .from(Department::Table, Department::HeadId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_secretary_id")
                            .from(Department::Table, Department::SecretaryId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_created_by_id")
                            .from(Department::Table, Department::CreatedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_department_name_school_id")
                    .table(Department::Table)
                    .col(Department::Name)
                    .col(Department::SchoolId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DepartmentAdmin::Table)
                    .if_not_exists()
                    .col(integer(DepartmentAdmin::DepartmentId))
                    .col(integer(DepartmentAdmin::UserId))
                    .primary_key(
                        Index::create()
                            .col(DepartmentAdmin::DepartmentId)
                            .col(DepartmentAdmin::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_admin_department_id")
                            .from(DepartmentAdmin::Table, DepartmentAdmin::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_admin_user_id")
                            .from(DepartmentAdmin::Table, DepartmentAdmin::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DepartmentAdmin::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Department {
    Table,
    Id,
    Name,
    SchoolId,
    HeadId,
    SecretaryId,
    CreatedById,
}

#[derive(DeriveIden)]
pub enum DepartmentAdmin {
    Table,
    DepartmentId,
    UserId,
}
