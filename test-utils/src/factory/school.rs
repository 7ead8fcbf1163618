//! School factory for creating test schools and their admin rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schools.
///
/// Head, secretary and creator are inserted into the school's admins on build.
pub struct SchoolFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    institution_id: i32,
    head_id: Option<i32>,
    secretary_id: Option<i32>,
    created_by_id: Option<i32>,
}

impl<'a> SchoolFactory<'a> {
    /// Creates a new SchoolFactory named `"School {id}"` under the given institution.
    pub fn new(db: &'a DatabaseConnection, institution_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("School {}", id),
            institution_id,
            head_id: None,
            secretary_id: None,
            created_by_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn head(mut self, user_id: Option<i32>) -> Self {
        self.head_id = user_id;
        self
    }

    pub fn secretary(mut self, user_id: Option<i32>) -> Self {
        self.secretary_id = user_id;
        self
    }

    pub fn created_by(mut self, user_id: Option<i32>) -> Self {
        self.created_by_id = user_id;
        self
    }

    /// Builds and inserts the school and its default admins.
    pub async fn build(self) -> Result<entity::school::Model, DbErr> {
        let school = entity::school::ActiveModel {
            name: ActiveValue::Set(self.name),
            institution_id: ActiveValue::Set(self.institution_id),
            head_id: ActiveValue::Set(self.head_id),
            secretary_id: ActiveValue::Set(self.secretary_id),
            created_by_id: ActiveValue::Set(self.created_by_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut admins = vec![self.head_id, self.secretary_id, self.created_by_id]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        admins.sort_unstable();
        admins.dedup();

        for user_id in admins {
            add_admin(self.db, school.id, user_id).await?;
        }

        Ok(school)
    }
}

/// Creates a school under `institution_id` created by `created_by`.
pub async fn create_school(
    db: &DatabaseConnection,
    institution_id: i32,
    created_by: i32,
) -> Result<entity::school::Model, DbErr> {
    SchoolFactory::new(db, institution_id)
        .created_by(Some(created_by))
        .build()
        .await
}

/// Grants `user_id` admin rights over the school.
pub async fn add_admin(db: &DatabaseConnection, school_id: i32, user_id: i32) -> Result<(), DbErr> {
    entity::school_admin::ActiveModel {
        school_id: ActiveValue::Set(school_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await?;

    Ok(())
}
