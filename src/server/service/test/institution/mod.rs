use std::collections::BTreeSet;

use crate::{
    model::api::Lookup,
    server::{
        error::AppError,
        model::institution::{CreateInstitutionParams, Institution, UpdateInstitutionParams},
        service::institution::InstitutionService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn admin_names(institution: &Institution) -> BTreeSet<String> {
    institution
        .admins
        .iter()
        .map(|user| user.username.clone())
        .collect()
}
