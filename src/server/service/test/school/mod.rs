use std::collections::BTreeSet;

use crate::{
    model::api::Lookup,
    server::{
        error::AppError,
        model::school::{CreateSchoolParams, School, UpdateSchoolParams},
        service::school::SchoolService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn admin_ids(school: &School) -> BTreeSet<i32> {
    school.admins.iter().map(|user| user.id).collect()
}
