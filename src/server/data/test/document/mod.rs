use std::collections::BTreeSet;

use crate::server::{data::document::DocumentRepository, model::page::Pagination};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, document::DocumentFactory},
};

mod categories;
mod find_by_title;
mod get_paginated;
