//! Category data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::data::filter::iequals;

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Finds a category by name, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(iequals(
                entity::prelude::Category,
                entity::category::Column::Name,
                name,
            ))
            .one(self.db)
            .await
    }

    /// Finds the category with the given name, creating it with that spelling if absent.
    pub async fn find_or_create(&self, name: &str) -> Result<entity::category::Model, DbErr> {
        match self.find_by_name(name).await? {
            Some(category) => Ok(category),
            None => self.create(name).await,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn rename(
        &self,
        category: entity::category::Model,
        name: &str,
    ) -> Result<entity::category::Model, DbErr> {
        let mut active: entity::category::ActiveModel = category.into();
        active.name = ActiveValue::Set(name.to_string());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
