//! Domain & parameter models for lecture operations.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::{
        api::Lookup,
        lecture::{CreateLectureDto, LectureDto, UpdateLectureDto},
    },
    server::{
        error::AppError,
        model::reference::{named_dtos, NamedRef, UserRef},
    },
};

#[derive(Debug, Clone)]
pub struct Lecture {
    pub id: i32,
    pub lecturer_id: i32,
    pub lecturer: UserRef,
    pub unit: NamedRef,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub comments: String,
    pub documents: Vec<NamedRef>,
}

impl Lecture {
    pub fn into_dto(self) -> LectureDto {
        LectureDto {
            id: self.id,
            lecturer_id: self.lecturer_id,
            lecturer: self.lecturer.username,
            unit: self.unit.into_dto(),
            name: self.name,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            comments: self.comments,
            documents: named_dtos(self.documents),
        }
    }
}

/// Rejects a schedule that does not end after it starts.
pub fn validate_schedule(start_time: NaiveTime, end_time: NaiveTime) -> Result<(), AppError> {
    if end_time <= start_time {
        return Err(AppError::BadRequest(
            "A lecture must end after it starts.".to_string(),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateLectureParams {
    pub lecturer_id: i32,
    pub unit_id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub comments: String,
    pub documents: Vec<Lookup>,
}

impl CreateLectureParams {
    pub fn from_dto(dto: CreateLectureDto, lecturer_id: i32, unit_id: i32) -> Self {
        Self {
            lecturer_id,
            unit_id,
            name: dto.name,
            date: dto.date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            comments: dto.comments,
            documents: dto.documents,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLectureParams {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub comments: Option<String>,
    pub documents: Option<Vec<Lookup>>,
}

impl From<UpdateLectureDto> for UpdateLectureParams {
    fn from(dto: UpdateLectureDto) -> Self {
        Self {
            name: dto.name,
            date: dto.date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            comments: dto.comments,
            documents: dto.documents,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LectureFilter {
    pub unit: Option<Lookup>,
    pub lecturer: Option<Lookup>,
}
