//! Department data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    data::{filter::iequals, school::LeadershipChanges},
    model::reference::NamedRef,
};

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub school_id: i32,
    pub head_id: Option<i32>,
    pub secretary_id: Option<i32>,
    pub created_by_id: Option<i32>,
}

pub struct DepartmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DepartmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewDepartment) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            name: ActiveValue::Set(new.name),
            school_id: ActiveValue::Set(new.school_id),
            head_id: ActiveValue::Set(new.head_id),
            secretary_id: ActiveValue::Set(new.secretary_id),
            created_by_id: ActiveValue::Set(new.created_by_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(id).one(self.db).await
    }

    /// Finds departments by name, ignoring case, optionally within a set of schools.
    pub async fn find_by_name(
        &self,
        name: &str,
        school_ids: Option<Vec<i32>>,
    ) -> Result<Vec<entity::department::Model>, DbErr> {
        let mut query = entity::prelude::Department::find().filter(iequals(
            entity::prelude::Department,
            entity::department::Column::Name,
            name,
        ));

        if let Some(school_ids) = school_ids {
            query = query.filter(entity::department::Column::SchoolId.is_in(school_ids));
        }

        query.all(self.db).await
    }

    /// Lists departments ordered by name, optionally within a set of schools.
    pub async fn get_all(
        &self,
        school_ids: Option<Vec<i32>>,
    ) -> Result<Vec<entity::department::Model>, DbErr> {
        let mut query =
            entity::prelude::Department::find().order_by_asc(entity::department::Column::Name);

        if let Some(school_ids) = school_ids {
            query = query.filter(entity::department::Column::SchoolId.is_in(school_ids));
        }

        query.all(self.db).await
    }

    pub async fn update(
        &self,
        department: entity::department::Model,
        changes: LeadershipChanges,
    ) -> Result<entity::department::Model, DbErr> {
        let mut active: entity::department::ActiveModel = department.clone().into();

        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(head_id) = changes.head_id {
            active.head_id = ActiveValue::Set(head_id);
        }
        if let Some(secretary_id) = changes.secretary_id {
            active.secretary_id = ActiveValue::Set(secretary_id);
        }

        if !active.is_changed() {
            return Ok(department);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Department::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn refs_by_school(&self, school_id: i32) -> Result<Vec<NamedRef>, DbErr> {
        Ok(self
            .get_all(Some(vec![school_id]))
            .await?
            .into_iter()
            .map(|department| NamedRef::new(department.id, department.name))
            .collect())
    }

    pub async fn refs(&self, ids: Vec<i32>) -> Result<Vec<NamedRef>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let departments = entity::prelude::Department::find()
            .filter(entity::department::Column::Id.is_in(ids))
            .order_by_asc(entity::department::Column::Name)
            .all(self.db)
            .await?;

        Ok(departments
            .into_iter()
            .map(|department| NamedRef::new(department.id, department.name))
            .collect())
    }

    /// User ids of the lecturers attached to a department.
    pub async fn get_lecturer_user_ids(&self, department_id: i32) -> Result<Vec<i32>, DbErr> {
        let lecturer_ids: Vec<i32> = entity::prelude::LecturerDepartment::find()
            .select_only()
            .column(entity::lecturer_department::Column::LecturerId)
            .filter(entity::lecturer_department::Column::DepartmentId.eq(department_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if lecturer_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Lecturer::find()
            .select_only()
            .column(entity::lecturer::Column::UserId)
            .filter(entity::lecturer::Column::Id.is_in(lecturer_ids))
            .into_tuple()
            .all(self.db)
            .await
    }
}
