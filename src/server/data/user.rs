//! User and auth token data repositories.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{data::filter::iequals, model::reference::Usernames};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    pub async fn create(
        &self,
        username: &str,
        email: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by username, ignoring case.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(iequals(
                entity::prelude::User,
                entity::user::Column::Username,
                username,
            ))
            .one(self.db)
            .await
    }

    /// Finds the owner of an auth token.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(auth_token) = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::Token.eq(token))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.find_by_id(auth_token.user_id).await
    }

    /// Fetches usernames for the given ids in a single query.
    pub async fn usernames<I>(&self, ids: I) -> Result<Usernames, DbErr>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut ids: Vec<i32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(Usernames::default());
        }

        let users: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        Ok(Usernames::new(users))
    }
}

pub struct AuthTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        token: &str,
    ) -> Result<entity::auth_token::Model, DbErr> {
        entity::auth_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes every token belonging to the user.
    pub async fn delete_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
