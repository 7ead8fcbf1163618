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
                    .table(Institution::Table)
                    .if_not_exists()
                    .col(pk_auto(Institution::Id))
                    .col(string(Institution::Category))
                    .col(string_uniq(Institution::Name))
                    .col(integer_null(Institution::ChancellorId))
                    .col(integer_null(Institution::ViceChancellorId))
                    .col(integer_null(Institution::CreatedById))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_institution_chancellor_id")
                            .from(Institution::Table, Institution::ChancellorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_institution_vice_chancellor_id")
                            .from(Institution::Table, Institution::ViceChancellorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_institution_created_by_id")
                            .from(Institution::Table, Institution::CreatedById)
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
                    .table(InstitutionAdmin::Table)
                    .if_not_exists()
                    .col(integer(InstitutionAdmin::InstitutionId))
                    .col(integer(InstitutionAdmin::UserId))
                    .primary_key(
                        Index::create()
                            .col(InstitutionAdmin::InstitutionId)
                            .col(InstitutionAdmin::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_institution_admin_institution_id")
                            .from(InstitutionAdmin::Table, InstitutionAdmin::InstitutionId)
                            .to(Institution::Table, Institution::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_institution_admin_user_id")
                            .from(InstitutionAdmin::Table, InstitutionAdmin::UserId)
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
            .drop_table(Table::drop().table(InstitutionAdmin::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Institution::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Institution {
    Table,
    Id,
    Category,
    Name,
    ChancellorId,
    ViceChancellorId,
    CreatedById,
}

#[derive(DeriveIden)]
pub enum InstitutionAdmin {
    Table,
    InstitutionId,
    UserId,
}
