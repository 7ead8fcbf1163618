use crate::server::data::user::{AuthTokenRepository, UserRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_token;
mod find_by_username;
mod usernames;
