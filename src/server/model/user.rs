//! Domain models for user accounts.

use chrono::{DateTime, Utc};

use crate::model::account::{AccountDto, TokenDto};

#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            username: self.username,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// A user together with a freshly issued token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub user: User,
    pub token: String,
}

impl IssuedToken {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            token: self.token,
            account: self.user.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: Option<String>,
}
