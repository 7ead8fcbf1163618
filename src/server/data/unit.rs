//! Unit data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{data::filter::iequals, model::reference::NamedRef};

pub struct UnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        course_id: i32,
        created_by_id: Option<i32>,
    ) -> Result<entity::unit::Model, DbErr> {
        entity::unit::ActiveModel {
            name: ActiveValue::Set(name),
            course_id: ActiveValue::Set(course_id),
            created_by_id: ActiveValue::Set(created_by_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::unit::Model>, DbErr> {
        entity::prelude::Unit::find_by_id(id).one(self.db).await
    }

    /// Finds units by name, ignoring case, optionally within a set of courses.
    pub async fn find_by_name(
        &self,
        name: &str,
        course_ids: Option<Vec<i32>>,
    ) -> Result<Vec<entity::unit::Model>, DbErr> {
        let mut query = entity::prelude::Unit::find().filter(iequals(
            entity::prelude::Unit,
            entity::unit::Column::Name,
            name,
        ));

        if let Some(course_ids) = course_ids {
            query = query.filter(entity::unit::Column::CourseId.is_in(course_ids));
        }

        query.all(self.db).await
    }

    pub async fn get_all(
        &self,
        course_ids: Option<Vec<i32>>,
    ) -> Result<Vec<entity::unit::Model>, DbErr> {
        let mut query = entity::prelude::Unit::find().order_by_asc(entity::unit::Column::Name);

        if let Some(course_ids) = course_ids {
            query = query.filter(entity::unit::Column::CourseId.is_in(course_ids));
        }

        query.all(self.db).await
    }

    pub async fn rename(
        &self,
        unit: entity::unit::Model,
        name: String,
    ) -> Result<entity::unit::Model, DbErr> {
        let mut active: entity::unit::ActiveModel = unit.into();
        active.name = ActiveValue::Set(name);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Unit::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn refs_by_course(&self, course_id: i32) -> Result<Vec<NamedRef>, DbErr> {
        Ok(self
            .get_all(Some(vec![course_id]))
            .await?
            .into_iter()
            .map(|unit| NamedRef::new(unit.id, unit.name))
            .collect())
    }
}
