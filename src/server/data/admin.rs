//! Admin junction repository shared by institutions, schools, departments and clubs.

use std::collections::BTreeSet;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::model::admin::{AdminDiff, AdminScope};

/// Repository over the four `*_admin` junction tables, dispatched by `AdminScope`.
pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the user ids administering the scoped record.
    pub async fn get_admin_ids(&self, scope: AdminScope) -> Result<BTreeSet<i32>, DbErr> {
        let ids: Vec<i32> = match scope {
            AdminScope::Institution(id) => {
                entity::prelude::InstitutionAdmin::find()
                    .select_only()
                    .column(entity::institution_admin::Column::UserId)
                    .filter(entity::institution_admin::Column::InstitutionId.eq(id))
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
            AdminScope::School(id) => {
                entity::prelude::SchoolAdmin::find()
                    .select_only()
                    .column(entity::school_admin::Column::UserId)
                    .filter(entity::school_admin::Column::SchoolId.eq(id))
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
            AdminScope::Department(id) => {
                entity::prelude::DepartmentAdmin::find()
                    .select_only()
                    .column(entity::department_admin::Column::UserId)
                    .filter(entity::department_admin::Column::DepartmentId.eq(id))
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
            AdminScope::ClubSociety(id) => {
                entity::prelude::ClubSocietyAdmin::find()
                    .select_only()
                    .column(entity::club_society_admin::Column::UserId)
                    .filter(entity::club_society_admin::Column::ClubSocietyId.eq(id))
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
        };

        Ok(ids.into_iter().collect())
    }

    /// Checks whether the user administers the scoped record.
    pub async fn is_admin(&self, scope: AdminScope, user_id: i32) -> Result<bool, DbErr> {
        let count = match scope {
            AdminScope::Institution(id) => {
                entity::prelude::InstitutionAdmin::find()
                    .filter(entity::institution_admin::Column::InstitutionId.eq(id))
                    .filter(entity::institution_admin::Column::UserId.eq(user_id))
                    .count(self.db)
                    .await?
            }
            AdminScope::School(id) => {
                entity::prelude::SchoolAdmin::find()
                    .filter(entity::school_admin::Column::SchoolId.eq(id))
                    .filter(entity::school_admin::Column::UserId.eq(user_id))
                    .count(self.db)
                    .await?
            }
            AdminScope::Department(id) => {
                entity::prelude::DepartmentAdmin::find()
                    .filter(entity::department_admin::Column::DepartmentId.eq(id))
                    .filter(entity::department_admin::Column::UserId.eq(user_id))
                    .count(self.db)
                    .await?
            }
            AdminScope::ClubSociety(id) => {
                entity::prelude::ClubSocietyAdmin::find()
                    .filter(entity::club_society_admin::Column::ClubSocietyId.eq(id))
                    .filter(entity::club_society_admin::Column::UserId.eq(user_id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }

    /// Inserts admin rows. Callers pass only users that are not admins yet.
    pub async fn add(&self, scope: AdminScope, user_ids: &BTreeSet<i32>) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        match scope {
            AdminScope::Institution(id) => {
                let rows = user_ids
                    .iter()
                    .map(|user_id| entity::institution_admin::ActiveModel {
                        institution_id: sea_orm::ActiveValue::Set(id),
                        user_id: sea_orm::ActiveValue::Set(*user_id),
                    });
                entity::prelude::InstitutionAdmin::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
            AdminScope::School(id) => {
                let rows = user_ids
                    .iter()
                    .map(|user_id| entity::school_admin::ActiveModel {
                        school_id: sea_orm::ActiveValue::Set(id),
                        user_id: sea_orm::ActiveValue::Set(*user_id),
                    });
                entity::prelude::SchoolAdmin::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
            AdminScope::Department(id) => {
                let rows = user_ids
                    .iter()
                    .map(|user_id| entity::department_admin::ActiveModel {
                        department_id: sea_orm::ActiveValue::Set(id),
                        user_id: sea_orm::ActiveValue::Set(*user_id),
                    });
                entity::prelude::DepartmentAdmin::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
            AdminScope::ClubSociety(id) => {
                let rows = user_ids
                    .iter()
                    .map(|user_id| entity::club_society_admin::ActiveModel {
                        club_society_id: sea_orm::ActiveValue::Set(id),
                        user_id: sea_orm::ActiveValue::Set(*user_id),
                    });
                entity::prelude::ClubSocietyAdmin::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    /// Deletes admin rows for the given users.
    pub async fn remove(&self, scope: AdminScope, user_ids: &BTreeSet<i32>) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let user_ids: Vec<i32> = user_ids.iter().copied().collect();

        match scope {
            AdminScope::Institution(id) => {
                entity::prelude::InstitutionAdmin::delete_many()
                    .filter(entity::institution_admin::Column::InstitutionId.eq(id))
                    .filter(entity::institution_admin::Column::UserId.is_in(user_ids))
                    .exec(self.db)
                    .await?;
            }
            AdminScope::School(id) => {
                entity::prelude::SchoolAdmin::delete_many()
                    .filter(entity::school_admin::Column::SchoolId.eq(id))
                    .filter(entity::school_admin::Column::UserId.is_in(user_ids))
                    .exec(self.db)
                    .await?;
            }
            AdminScope::Department(id) => {
                entity::prelude::DepartmentAdmin::delete_many()
                    .filter(entity::department_admin::Column::DepartmentId.eq(id))
                    .filter(entity::department_admin::Column::UserId.is_in(user_ids))
                    .exec(self.db)
                    .await?;
            }
            AdminScope::ClubSociety(id) => {
                entity::prelude::ClubSocietyAdmin::delete_many()
                    .filter(entity::club_society_admin::Column::ClubSocietyId.eq(id))
                    .filter(entity::club_society_admin::Column::UserId.is_in(user_ids))
                    .exec(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    /// Applies a computed difference to the stored admin set.
    pub async fn apply(&self, scope: AdminScope, diff: &AdminDiff) -> Result<(), DbErr> {
        self.remove(scope, &diff.removed).await?;
        self.add(scope, &diff.added).await
    }

    /// Replaces the stored admin set with `admins`, returning the difference applied.
    pub async fn replace(
        &self,
        scope: AdminScope,
        admins: &BTreeSet<i32>,
    ) -> Result<AdminDiff, DbErr> {
        let current = self.get_admin_ids(scope).await?;
        let diff = AdminDiff::between(&current, admins);

        self.apply(scope, &diff).await?;

        Ok(diff)
    }
}
