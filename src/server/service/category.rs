use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{BulkDeleteResult, Category},
    service::resolve::non_blank,
};

const DUPLICATE_CATEGORY: &str = "A category with this name already exists.";

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<Category, AppError> {
        let name = non_blank(name, "name")?;
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::BadRequest(DUPLICATE_CATEGORY.to_string()));
        }

        let category = repo.create(&name).await?;

        tracing::info!("Created category {} ({})", category.name, category.id);

        Ok(Category::from_entity(category))
    }

    /// Creates several categories at once. Nothing is created if any name is blank,
    /// repeated within the request, or already stored (all ignoring case).
    pub async fn bulk_create(&self, names: &[String]) -> Result<Vec<Category>, AppError> {
        let mut seen = HashSet::new();
        let mut cleaned = Vec::with_capacity(names.len());
        let mut repeated = Vec::new();

        for name in names {
            let name = non_blank(name, "name")?;
            if seen.insert(name.to_lowercase()) {
                cleaned.push(name);
            } else {
                repeated.push(name);
            }
        }

        if !repeated.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Duplicate category names in the request: {}.",
                repeated.join(", ")
            )));
        }

        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        let mut existing = Vec::new();
        for name in &cleaned {
            if let Some(category) = repo.find_by_name(name).await? {
                existing.push(category.name);
            }
        }
        if !existing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Categories already exist: {}.",
                existing.join(", ")
            )));
        }

        let mut created = Vec::with_capacity(cleaned.len());
        for name in &cleaned {
            created.push(Category::from_entity(repo.create(name).await?));
        }

        txn.commit().await?;

        tracing::info!("Created {} categories", created.len());

        Ok(created)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        Ok(CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Category::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(Category::from_entity)
            .collect())
    }

    pub async fn rename(&self, id: i32, name: &str) -> Result<Option<Category>, AppError> {
        let name = non_blank(name, "name")?;
        let repo = CategoryRepository::new(self.db);

        let Some(category) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if repo
            .find_by_name(&name)
            .await?
            .is_some_and(|other| other.id != category.id)
        {
            return Err(AppError::BadRequest(DUPLICATE_CATEGORY.to_string()));
        }

        let category = if category.name != name {
            repo.rename(category, &name).await?
        } else {
            category
        };

        Ok(Some(Category::from_entity(category)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted category {}", id);

        Ok(true)
    }

    /// Deletes a category by name, ignoring case.
    pub async fn delete_by_name(&self, name: &str) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);

        let Some(category) = repo.find_by_name(name.trim()).await? else {
            return Ok(false);
        };

        repo.delete(category.id).await?;

        tracing::info!("Deleted category {} ({})", category.name, category.id);

        Ok(true)
    }

    /// Deletes every category whose name matches one of `names`, ignoring case, and
    /// reports which names matched.
    pub async fn bulk_delete(&self, names: &[String]) -> Result<BulkDeleteResult, AppError> {
        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        let mut result = BulkDeleteResult::default();
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            match repo.find_by_name(name).await? {
                Some(category) => {
                    repo.delete(category.id).await?;
                    result.deleted.push(category.name);
                }
                None => result.not_found.push(name.to_string()),
            }
        }

        txn.commit().await?;

        tracing::info!("Bulk deleted {} categories", result.deleted.len());

        Ok(result)
    }
}
