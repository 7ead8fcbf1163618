use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User, m20261001_000002_create_institution_table::Institution,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(School::Table)
                    .if_not_exists()
                    .col(pk_auto(School::Id))
                    .col(string(School::Name))
                    .col(integer(School::InstitutionId))
                    .col(integer_null(School::HeadId))
                    .col(integer_null(School::SecretaryId))
                    .col(integer_null(School::CreatedById))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_institution_id")
                            .from(School::Table, School::InstitutionId)
                            .to(Institution::Table, Institution::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_head_id")
                            .from(School::Table, School::HeadId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_secretary_id")
                            .from(School::Table, School::SecretaryId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_created_by_id")
                            .from(School::Table, School::CreatedById)
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
                    .name("idx_school_name_institution_id")
                    .table(School::Table)
                    .col(School::Name)
                    .col(School::InstitutionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SchoolAdmin::Table)
                    .if_not_exists()
                    .col(integer(SchoolAdmin::SchoolId))
                    .col(integer(SchoolAdmin::UserId))
                    .primary_key(
                        Index::create()
                            .col(SchoolAdmin::SchoolId)
                            .col(SchoolAdmin::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_admin_school_id")
                            .from(SchoolAdmin::Table, SchoolAdmin::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_admin_user_id")
                            .from(SchoolAdmin::Table, SchoolAdmin::UserId)
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
            .drop_table(Table::drop().table(SchoolAdmin::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(School::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum School {
    Table,
    Id,
    Name,
    InstitutionId,
    HeadId,
    SecretaryId,
    CreatedById,
}

#[derive(DeriveIden)]
pub enum SchoolAdmin {
    Table,
    SchoolId,
    UserId,
}
