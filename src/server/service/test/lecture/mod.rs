use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::api::Lookup,
    server::{
        error::AppError,
        model::{
            lecture::{CreateLectureParams, LectureFilter, UpdateLectureParams},
            lecturer::CreateLecturerParams,
        },
        service::{lecture::LectureService, lecturer::LecturerService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

/// Unit and lecturer profile ready for scheduling.
struct Fixture {
    lecturer_id: i32,
    unit_id: i32,
}

async fn fixture(db: &sea_orm::DatabaseConnection) -> Result<Fixture, AppError> {
    let user = factory::create_user(db).await?;
    let (institution, _, department) =
        factory::helpers::create_hierarchy_for_user(db, &user).await?;
    let course = factory::create_course(db, department.id, Some(user.id)).await?;
    let unit = factory::create_unit(db, course.id, Some(user.id)).await?;

    let lecturer = LecturerService::new(db)
        .create(CreateLecturerParams {
            user_id: user.id,
            institution_id: Some(institution.id),
            departments: vec![Lookup::Id(department.id)],
        })
        .await?;

    Ok(Fixture {
        lecturer_id: lecturer.id,
        unit_id: unit.id,
    })
}

fn time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

fn params(fixture: &Fixture, name: &str) -> CreateLectureParams {
    CreateLectureParams {
        lecturer_id: fixture.lecturer_id,
        unit_id: fixture.unit_id,
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        start_time: time(9),
        end_time: time(11),
        comments: String::new(),
        documents: Vec::new(),
    }
}
