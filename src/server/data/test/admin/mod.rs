use std::collections::BTreeSet;

use crate::server::{
    data::admin::AdminRepository,
    model::admin::{AdminDiff, AdminScope},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_admin_ids;
mod is_admin;
mod replace;
