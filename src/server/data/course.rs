//! Course data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{data::filter::iequals, model::reference::NamedRef};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        department_id: i32,
        created_by_id: Option<i32>,
    ) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            name: ActiveValue::Set(name),
            department_id: ActiveValue::Set(department_id),
            created_by_id: ActiveValue::Set(created_by_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// Finds courses by name, ignoring case, optionally within a set of departments.
    pub async fn find_by_name(
        &self,
        name: &str,
        department_ids: Option<Vec<i32>>,
    ) -> Result<Vec<entity::course::Model>, DbErr> {
        let mut query = entity::prelude::Course::find().filter(iequals(
            entity::prelude::Course,
            entity::course::Column::Name,
            name,
        ));

        if let Some(department_ids) = department_ids {
            query = query.filter(entity::course::Column::DepartmentId.is_in(department_ids));
        }

        query.all(self.db).await
    }

    pub async fn get_all(
        &self,
        department_ids: Option<Vec<i32>>,
    ) -> Result<Vec<entity::course::Model>, DbErr> {
        let mut query = entity::prelude::Course::find().order_by_asc(entity::course::Column::Name);

        if let Some(department_ids) = department_ids {
            query = query.filter(entity::course::Column::DepartmentId.is_in(department_ids));
        }

        query.all(self.db).await
    }

    pub async fn rename(
        &self,
        course: entity::course::Model,
        name: String,
    ) -> Result<entity::course::Model, DbErr> {
        let mut active: entity::course::ActiveModel = course.into();
        active.name = ActiveValue::Set(name);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Course::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn refs_by_department(&self, department_id: i32) -> Result<Vec<NamedRef>, DbErr> {
        Ok(self
            .get_all(Some(vec![department_id]))
            .await?
            .into_iter()
            .map(|course| NamedRef::new(course.id, course.name))
            .collect())
    }
}
