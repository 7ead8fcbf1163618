use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LectureDto {
    pub id: i32,
    pub lecturer_id: i32,
    /// Username of the lecturer
    pub lecturer: String,
    pub unit: NamedRefDto,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub comments: String,
    pub documents: Vec<NamedRefDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateLectureDto {
    pub unit: Lookup,
    /// Narrows a unit given by name
    #[serde(default)]
    pub course: Option<Lookup>,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub documents: Vec<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateLectureDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub comments: Option<String>,
    /// Replaces the attached documents when present
    #[serde(default)]
    pub documents: Option<Vec<Lookup>>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct LectureQuery {
    /// Unit id or name
    pub unit: Option<String>,
    /// Lecturer id or username
    pub lecturer: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct LectureLookupQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub date: Option<NaiveDate>,
}
