use crate::server::{
    data::institution::{InstitutionChanges, InstitutionRepository},
    model::page::Pagination,
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, institution::InstitutionFactory},
};

mod find_by_name;
mod get_paginated;
mod update;
