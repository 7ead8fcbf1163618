//! Student data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::student::StudentPlacement;

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        placement: StudentPlacement,
    ) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            institution_id: ActiveValue::Set(placement.institution_id),
            school_id: ActiveValue::Set(placement.school_id),
            department_id: ActiveValue::Set(placement.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists students matching every level set in `filter`.
    pub async fn get_all(
        &self,
        filter: StudentPlacement,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        let mut query = entity::prelude::Student::find().order_by_asc(entity::student::Column::Id);

        if let Some(institution_id) = filter.institution_id {
            query = query.filter(entity::student::Column::InstitutionId.eq(institution_id));
        }
        if let Some(school_id) = filter.school_id {
            query = query.filter(entity::student::Column::SchoolId.eq(school_id));
        }
        if let Some(department_id) = filter.department_id {
            query = query.filter(entity::student::Column::DepartmentId.eq(department_id));
        }

        query.all(self.db).await
    }

    pub async fn set_placement(
        &self,
        student: entity::student::Model,
        placement: StudentPlacement,
    ) -> Result<entity::student::Model, DbErr> {
        let mut active: entity::student::ActiveModel = student.into();
        active.institution_id = ActiveValue::Set(placement.institution_id);
        active.school_id = ActiveValue::Set(placement.school_id);
        active.department_id = ActiveValue::Set(placement.department_id);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
