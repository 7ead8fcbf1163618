use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::RegisterParams,
    service::account::AccountService,
};
use test_utils::builder::TestBuilder;

mod register;
