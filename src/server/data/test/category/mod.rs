use crate::server::data::category::CategoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_or_create;
