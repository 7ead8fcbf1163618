//! School data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{data::filter::iequals, model::reference::NamedRef};

#[derive(Debug, Clone)]
pub struct NewSchool {
    pub name: String,
    pub institution_id: i32,
    pub head_id: Option<i32>,
    pub secretary_id: Option<i32>,
    pub created_by_id: Option<i32>,
}

/// Column changes for a school or department; `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct LeadershipChanges {
    pub name: Option<String>,
    pub head_id: Option<Option<i32>>,
    pub secretary_id: Option<Option<i32>>,
}

pub struct SchoolRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SchoolRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewSchool) -> Result<entity::school::Model, DbErr> {
        entity::school::ActiveModel {
            name: ActiveValue::Set(new.name),
            institution_id: ActiveValue::Set(new.institution_id),
            head_id: ActiveValue::Set(new.head_id),
            secretary_id: ActiveValue::Set(new.secretary_id),
            created_by_id: ActiveValue::Set(new.created_by_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::school::Model>, DbErr> {
        entity::prelude::School::find_by_id(id).one(self.db).await
    }

    /// Finds schools by name, ignoring case, optionally within one institution.
    pub async fn find_by_name(
        &self,
        name: &str,
        institution_id: Option<i32>,
    ) -> Result<Vec<entity::school::Model>, DbErr> {
        let mut query = entity::prelude::School::find().filter(iequals(
            entity::prelude::School,
            entity::school::Column::Name,
            name,
        ));

        if let Some(institution_id) = institution_id {
            query = query.filter(entity::school::Column::InstitutionId.eq(institution_id));
        }

        query.all(self.db).await
    }

    /// Lists schools ordered by name, optionally within one institution.
    pub async fn get_all(
        &self,
        institution_id: Option<i32>,
    ) -> Result<Vec<entity::school::Model>, DbErr> {
        let mut query = entity::prelude::School::find().order_by_asc(entity::school::Column::Name);

        if let Some(institution_id) = institution_id {
            query = query.filter(entity::school::Column::InstitutionId.eq(institution_id));
        }

        query.all(self.db).await
    }

    pub async fn get_ids_by_institution(&self, institution_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(self
            .get_all(Some(institution_id))
            .await?
            .into_iter()
            .map(|school| school.id)
            .collect())
    }

    pub async fn update(
        &self,
        school: entity::school::Model,
        changes: LeadershipChanges,
    ) -> Result<entity::school::Model, DbErr> {
        let mut active: entity::school::ActiveModel = school.clone().into();

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
            return Ok(school);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::School::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// References to the schools of an institution, ordered by name.
    pub async fn refs_by_institution(&self, institution_id: i32) -> Result<Vec<NamedRef>, DbErr> {
        Ok(self
            .get_all(Some(institution_id))
            .await?
            .into_iter()
            .map(|school| NamedRef::new(school.id, school.name))
            .collect())
    }

    pub async fn refs(&self, ids: Vec<i32>) -> Result<Vec<NamedRef>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let schools = entity::prelude::School::find()
            .filter(entity::school::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(schools
            .into_iter()
            .map(|school| NamedRef::new(school.id, school.name))
            .collect())
    }
}
