use crate::server::{error::AppError, service::category::CategoryService};
use test_utils::{builder::TestBuilder, factory};

mod bulk;
mod create;
