use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User,
    m20261001_000002_create_institution_table::Institution,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubSociety::Table)
                    .if_not_exists()
                    .col(pk_auto(ClubSociety::Id))
                    .col(string(ClubSociety::Name))
                    .col(integer_null(ClubSociety::InstitutionId))
                    .col(text(ClubSociety::Bio).default(""))
                    .col(string(ClubSociety::Location).default(""))
                    .col(string(ClubSociety::ContactNumber).default(""))
                    .col(string(ClubSociety::Website).default(""))
                    .col(string(ClubSociety::Facebook).default(""))
                    .col(string(ClubSociety::Twitter).default(""))
                    .col(string(ClubSociety::Instagram).default(""))
                    .col(string(ClubSociety::Tiktok).default(""))
                    .col(string(ClubSociety::Linkedin).default(""))
                    .col(string(ClubSociety::Youtube).default(""))
                    .col(integer_null(ClubSociety::CreatedById))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_society_institution_id")
                            .from(ClubSociety::Table, ClubSociety::InstitutionId)
                            .to(Institution::Table, Institution::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_society_created_by_id")
                            .from(ClubSociety::Table, ClubSociety::CreatedById)
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
                    .name("idx_club_society_name_institution_id")
                    .table(ClubSociety::Table)
                    .col(ClubSociety::Name)
                    .col(ClubSociety::InstitutionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for (table, name) in [
            (ClubSociety::AdminTable, "club_society_admin"),
            (ClubSociety::MemberTable, "club_society_member"),
        ] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(integer(ClubSociety::ClubSocietyId))
                        .col(integer(ClubSociety::UserId))
                        .primary_key(
                            Index::create()
                                .col(ClubSociety::ClubSocietyId)
                                .col(ClubSociety::UserId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{name}_club_society_id"))
                                .from(table, ClubSociety::ClubSocietyId)
                                .to(ClubSociety::Table, ClubSociety::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{name}_user_id"))
                                .from(table, ClubSociety::UserId)
                                .to(User::Table, User::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [ClubSociety::MemberTable, ClubSociety::AdminTable, ClubSociety::Table] {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum ClubSociety {
    Table,
    #[sea_orm(iden = "club_society_admin")]
    AdminTable,
    #[sea_orm(iden = "club_society_member")]
    MemberTable,
    Id,
    Name,
    InstitutionId,
    Bio,
    Location,
    ContactNumber,
    Website,
    Facebook,
    Twitter,
    Instagram,
    Tiktok,
    Linkedin,
    Youtube,
    CreatedById,
    ClubSocietyId,
    UserId,
}
