use std::collections::BTreeSet;

use crate::{
    model::api::Lookup,
    server::{
        error::AppError,
        model::club::{Club, ClubProfile, CreateClubParams, UpdateClubParams},
        service::club::ClubService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod membership;
mod update;

fn member_ids(club: &Club) -> BTreeSet<i32> {
    club.members.iter().map(|user| user.id).collect()
}

fn admin_ids(club: &Club) -> BTreeSet<i32> {
    club.admins.iter().map(|user| user.id).collect()
}

fn params(name: &str, created_by: i32) -> CreateClubParams {
    CreateClubParams {
        name: name.to_string(),
        institution: None,
        profile: ClubProfile::default(),
        admins: Vec::new(),
        members: Vec::new(),
        created_by,
    }
}
