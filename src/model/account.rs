use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterAccountDto {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AccountDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Freshly issued bearer token along with the account it authenticates.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TokenDto {
    pub token: String,
    pub account: AccountDto,
}
