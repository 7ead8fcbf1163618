//! Institution data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::filter::iequals,
    model::{page::Pagination, reference::NamedRef},
};

/// Resolved column values for inserting an institution.
#[derive(Debug, Clone)]
pub struct NewInstitution {
    pub category: String,
    pub name: String,
    pub chancellor_id: Option<i32>,
    pub vice_chancellor_id: Option<i32>,
    pub created_by_id: Option<i32>,
}

/// Column changes for an institution; `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct InstitutionChanges {
    pub category: Option<String>,
    pub name: Option<String>,
    pub chancellor_id: Option<Option<i32>>,
    pub vice_chancellor_id: Option<Option<i32>>,
}

pub struct InstitutionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InstitutionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewInstitution) -> Result<entity::institution::Model, DbErr> {
        entity::institution::ActiveModel {
            category: ActiveValue::Set(new.category),
            name: ActiveValue::Set(new.name),
            chancellor_id: ActiveValue::Set(new.chancellor_id),
            vice_chancellor_id: ActiveValue::Set(new.vice_chancellor_id),
            created_by_id: ActiveValue::Set(new.created_by_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find_by_id(id).one(self.db).await
    }

    /// Finds an institution by name, ignoring case.
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find()
            .filter(iequals(
                entity::prelude::Institution,
                entity::institution::Column::Name,
                name,
            ))
            .one(self.db)
            .await
    }

    /// Gets a page of institutions ordered by name, optionally narrowed by category.
    ///
    /// # Returns
    /// - `Ok((Vec<Model>, u64))` - The requested page and the total matching count
    pub async fn get_paginated(
        &self,
        category: Option<&str>,
        pagination: Pagination,
    ) -> Result<(Vec<entity::institution::Model>, u64), DbErr> {
        let mut query =
            entity::prelude::Institution::find().order_by_asc(entity::institution::Column::Name);

        if let Some(category) = category {
            query = query.filter(iequals(
                entity::prelude::Institution,
                entity::institution::Column::Category,
                category,
            ));
        }

        let paginator = query.paginate(self.db, pagination.per_page);
        let total = paginator.num_items().await?;
        let institutions = paginator.fetch_page(pagination.page).await?;

        Ok((institutions, total))
    }

    pub async fn update(
        &self,
        institution: entity::institution::Model,
        changes: InstitutionChanges,
    ) -> Result<entity::institution::Model, DbErr> {
        let mut active: entity::institution::ActiveModel = institution.clone().into();

        if let Some(category) = changes.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(chancellor_id) = changes.chancellor_id {
            active.chancellor_id = ActiveValue::Set(chancellor_id);
        }
        if let Some(vice_chancellor_id) = changes.vice_chancellor_id {
            active.vice_chancellor_id = ActiveValue::Set(vice_chancellor_id);
        }

        if !active.is_changed() {
            return Ok(institution);
        }

        active.update(self.db).await
    }

    /// Deletes an institution; schools and their descendants cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Institution::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the names of institutions by id, for references in other records.
    pub async fn refs(&self, ids: Vec<i32>) -> Result<Vec<NamedRef>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let institutions = entity::prelude::Institution::find()
            .filter(entity::institution::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(institutions
            .into_iter()
            .map(|institution| NamedRef::new(institution.id, institution.name))
            .collect())
    }
}
