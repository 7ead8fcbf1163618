//! Institution factory for creating test institutions and their admin rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test institutions.
///
/// Every non-null role holder (chancellor, vice chancellor, creator) is also inserted
/// into the institution's admins, mirroring what the service does on creation.
///
/// # Example
///
/// ```rust,ignore
/// let institution = InstitutionFactory::new(&db)
///     .name("Strathmore University")
///     .chancellor(Some(chancellor.id))
///     .created_by(Some(creator.id))
///     .build()
///     .await?;
/// ```
pub struct InstitutionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    chancellor_id: Option<i32>,
    vice_chancellor_id: Option<i32>,
    created_by_id: Option<i32>,
}

impl<'a> InstitutionFactory<'a> {
    /// Creates a new InstitutionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Institution {id}"`
    /// - category: `"University"`
    /// - no role holders
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Institution {}", id),
            category: "University".to_string(),
            chancellor_id: None,
            vice_chancellor_id: None,
            created_by_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn chancellor(mut self, user_id: Option<i32>) -> Self {
        self.chancellor_id = user_id;
        self
    }

    pub fn vice_chancellor(mut self, user_id: Option<i32>) -> Self {
        self.vice_chancellor_id = user_id;
        self
    }

    pub fn created_by(mut self, user_id: Option<i32>) -> Self {
        self.created_by_id = user_id;
        self
    }

    /// Builds and inserts the institution and its default admins.
    ///
    /// # Returns
    /// - `Ok(entity::institution::Model)` - Created institution entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::institution::Model, DbErr> {
        let institution = entity::institution::ActiveModel {
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            chancellor_id: ActiveValue::Set(self.chancellor_id),
            vice_chancellor_id: ActiveValue::Set(self.vice_chancellor_id),
            created_by_id: ActiveValue::Set(self.created_by_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut admins = vec![
            self.chancellor_id,
            self.vice_chancellor_id,
            self.created_by_id,
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
        admins.sort_unstable();
        admins.dedup();

        for user_id in admins {
            add_admin(self.db, institution.id, user_id).await?;
        }

        Ok(institution)
    }
}

/// Creates an institution created by (and therefore administered by) `created_by`.
pub async fn create_institution(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::institution::Model, DbErr> {
    InstitutionFactory::new(db)
        .created_by(Some(created_by))
        .build()
        .await
}

/// Grants `user_id` admin rights over the institution.
pub async fn add_admin(
    db: &DatabaseConnection,
    institution_id: i32,
    user_id: i32,
) -> Result<(), DbErr> {
    entity::institution_admin::ActiveModel {
        institution_id: ActiveValue::Set(institution_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await?;

    Ok(())
}
