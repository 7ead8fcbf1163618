//! Course and unit factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a course named `"Course {id}"` under `department_id`.
pub async fn create_course(
    db: &DatabaseConnection,
    department_id: i32,
    created_by: Option<i32>,
) -> Result<entity::course::Model, DbErr> {
    create_course_named(db, department_id, format!("Course {}", next_id()), created_by).await
}

/// Creates a course with the provided name under `department_id`.
pub async fn create_course_named(
    db: &DatabaseConnection,
    department_id: i32,
    name: impl Into<String>,
    created_by: Option<i32>,
) -> Result<entity::course::Model, DbErr> {
    entity::course::ActiveModel {
        name: ActiveValue::Set(name.into()),
        department_id: ActiveValue::Set(department_id),
        created_by_id: ActiveValue::Set(created_by),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a unit named `"Unit {id}"` under `course_id`.
pub async fn create_unit(
    db: &DatabaseConnection,
    course_id: i32,
    created_by: Option<i32>,
) -> Result<entity::unit::Model, DbErr> {
    entity::unit::ActiveModel {
        name: ActiveValue::Set(format!("Unit {}", next_id())),
        course_id: ActiveValue::Set(course_id),
        created_by_id: ActiveValue::Set(created_by),
        ..Default::default()
    }
    .insert(db)
    .await
}
