use url::Url;

use crate::{
    model::api::Lookup,
    server::{
        error::AppError,
        model::student::{CreateStudentParams, StudentFilter, UpdateStudentParams},
        service::student::StudentService,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, school::SchoolFactory},
};

mod documents;
mod placement;

fn enrol(user_id: i32) -> CreateStudentParams {
    CreateStudentParams {
        user_id,
        institution: None,
        school: None,
        department: None,
    }
}
