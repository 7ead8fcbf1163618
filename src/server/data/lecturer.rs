//! Lecturer data repository.

use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct LecturerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LecturerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        institution_id: Option<i32>,
    ) -> Result<entity::lecturer::Model, DbErr> {
        entity::lecturer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            institution_id: ActiveValue::Set(institution_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::lecturer::Model>, DbErr> {
        entity::prelude::Lecturer::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::lecturer::Model>, DbErr> {
        entity::prelude::Lecturer::find()
            .filter(entity::lecturer::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists lecturers, optionally narrowed to an institution and to a set of ids.
    pub async fn get_all(
        &self,
        institution_id: Option<i32>,
        ids: Option<Vec<i32>>,
    ) -> Result<Vec<entity::lecturer::Model>, DbErr> {
        let mut query = entity::prelude::Lecturer::find().order_by_asc(entity::lecturer::Column::Id);

        if let Some(institution_id) = institution_id {
            query = query.filter(entity::lecturer::Column::InstitutionId.eq(institution_id));
        }
        if let Some(ids) = ids {
            query = query.filter(entity::lecturer::Column::Id.is_in(ids));
        }

        query.all(self.db).await
    }

    pub async fn set_institution(
        &self,
        lecturer: entity::lecturer::Model,
        institution_id: Option<i32>,
    ) -> Result<entity::lecturer::Model, DbErr> {
        let mut active: entity::lecturer::ActiveModel = lecturer.into();
        active.institution_id = ActiveValue::Set(institution_id);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Lecturer::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn get_department_ids(&self, lecturer_id: i32) -> Result<BTreeSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::LecturerDepartment::find()
            .select_only()
            .column(entity::lecturer_department::Column::DepartmentId)
            .filter(entity::lecturer_department::Column::LecturerId.eq(lecturer_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    pub async fn get_ids_by_department(&self, department_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::LecturerDepartment::find()
            .select_only()
            .column(entity::lecturer_department::Column::LecturerId)
            .filter(entity::lecturer_department::Column::DepartmentId.eq(department_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Replaces the lecturer's departments with `department_ids`.
    pub async fn set_departments(
        &self,
        lecturer_id: i32,
        department_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        let current = self.get_department_ids(lecturer_id).await?;

        let removed: Vec<i32> = current.difference(department_ids).copied().collect();
        if !removed.is_empty() {
            entity::prelude::LecturerDepartment::delete_many()
                .filter(entity::lecturer_department::Column::LecturerId.eq(lecturer_id))
                .filter(entity::lecturer_department::Column::DepartmentId.is_in(removed))
                .exec(self.db)
                .await?;
        }

        let added: Vec<entity::lecturer_department::ActiveModel> = department_ids
            .difference(&current)
            .map(|department_id| entity::lecturer_department::ActiveModel {
                lecturer_id: ActiveValue::Set(lecturer_id),
                department_id: ActiveValue::Set(*department_id),
            })
            .collect();
        if !added.is_empty() {
            entity::prelude::LecturerDepartment::insert_many(added)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }
}
