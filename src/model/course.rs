use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
    pub department: NamedRefDto,
    pub created_by: Option<String>,
    pub units: Vec<NamedRefDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateCourseDto {
    pub name: String,
    pub department: Lookup,
    /// Narrows a department given by name
    #[serde(default)]
    pub school: Option<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateCourseDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct CourseQuery {
    /// Department id or name
    pub department: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct CourseLookupQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub school: Option<String>,
    pub institution: Option<String>,
}
