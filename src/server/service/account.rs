use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::{AuthTokenRepository, UserRepository},
    error::AppError,
    model::user::{IssuedToken, RegisterParams, User},
    util::token::generate_token,
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account and issues its first token.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - The new account and its token
    /// - `Err(AppError::BadRequest)` - Blank username or username already taken
    pub async fn register(&self, params: RegisterParams) -> Result<IssuedToken, AppError> {
        let username = params.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::BadRequest("A username is required.".to_string()));
        }

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::BadRequest(
                "A user with that username already exists.".to_string(),
            ));
        }

        let email = params
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());
        let user = user_repo.create(&username, email).await?;

        let token = generate_token();
        AuthTokenRepository::new(&txn).create(user.id, &token).await?;

        txn.commit().await?;

        tracing::info!("Registered account {} ({})", user.username, user.id);

        Ok(IssuedToken {
            user: User::from_entity(user),
            token,
        })
    }

    /// Revokes every token of the user and issues a new one.
    pub async fn rotate_token(&self, user: entity::user::Model) -> Result<IssuedToken, AppError> {
        let txn = self.db.begin().await?;

        let token_repo = AuthTokenRepository::new(&txn);
        let revoked = token_repo.delete_for_user(user.id).await?;

        let token = generate_token();
        token_repo.create(user.id, &token).await?;

        txn.commit().await?;

        tracing::debug!("Rotated token for user {}, revoked {}", user.id, revoked);

        Ok(IssuedToken {
            user: User::from_entity(user),
            token,
        })
    }
}
