use std::collections::BTreeSet;

use crate::server::{
    data::club::{ClubRepository, NewClub},
    model::club::ClubProfile,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod members;
mod update;
