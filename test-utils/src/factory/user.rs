//! User factory for creating test user entities and their auth tokens.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("alice")
///     .email("alice@example.com")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: None,
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the provided username.
pub async fn create_user_named(
    db: &DatabaseConnection,
    username: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).username(username).build().await
}

/// Creates a user along with an auth token.
///
/// The token value is `"token-{username}"`, unique because usernames are.
///
/// # Returns
/// - `Ok((entity::user::Model, String))` - Created user and its raw token
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_token(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, String), DbErr> {
    let user = create_user(db).await?;
    let token = format!("token-{}", user.username);

    entity::auth_token::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        token: ActiveValue::Set(token.clone()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok((user, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_account_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.username.starts_with("user"));
        assert!(user.email.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_account_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.username, user2.username);

        Ok(())
    }

    #[tokio::test]
    async fn creates_token_for_user() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_account_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, token) = create_user_with_token(db).await?;

        assert_eq!(token, format!("token-{}", user.username));

        Ok(())
    }
}
