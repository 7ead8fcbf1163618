//! Department factory for creating test departments and their admin rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments.
///
/// Head, secretary and creator are inserted into the department's admins on build.
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    school_id: i32,
    head_id: Option<i32>,
    secretary_id: Option<i32>,
    created_by_id: Option<i32>,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new DepartmentFactory named `"Department {id}"` under the given school.
    pub fn new(db: &'a DatabaseConnection, school_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Department {}", id),
            school_id,
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

    /// Builds and inserts the department and its default admins.
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        let department = entity::department::ActiveModel {
            name: ActiveValue::Set(self.name),
            school_id: ActiveValue::Set(self.school_id),
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
            add_admin(self.db, department.id, user_id).await?;
        }

        Ok(department)
    }
}

/// Creates a department under `school_id` created by `created_by`.
pub async fn create_department(
    db: &DatabaseConnection,
    school_id: i32,
    created_by: i32,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db, school_id)
        .created_by(Some(created_by))
        .build()
        .await
}

/// Grants `user_id` admin rights over the department.
pub async fn add_admin(
    db: &DatabaseConnection,
    department_id: i32,
    user_id: i32,
) -> Result<(), DbErr> {
    entity::department_admin::ActiveModel {
        department_id: ActiveValue::Set(department_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await?;

    Ok(())
}
