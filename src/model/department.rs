use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{deserialize_some, Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DepartmentDto {
    pub id: i32,
    pub name: String,
    pub school: NamedRefDto,
    pub institution: NamedRefDto,
    pub head: Option<String>,
    pub secretary: Option<String>,
    pub created_by: Option<String>,
    pub admins: Vec<String>,
    pub courses: Vec<NamedRefDto>,
    /// Usernames of lecturers attached to the department
    pub lecturers: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateDepartmentDto {
    pub name: String,
    pub school: Lookup,
    /// Narrows a school given by name
    #[serde(default)]
    pub institution: Option<Lookup>,
    #[serde(default)]
    pub head: Option<Lookup>,
    #[serde(default)]
    pub secretary: Option<Lookup>,
    #[serde(default)]
    pub admins: Vec<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateDepartmentDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Lookup>)]
    pub head: Option<Option<Lookup>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Lookup>)]
    pub secretary: Option<Option<Lookup>>,
    #[serde(default)]
    pub admins: Vec<Lookup>,
    #[serde(default)]
    pub remove_admins: Vec<Lookup>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct DepartmentQuery {
    /// School id or name
    pub school: Option<String>,
    /// Institution id or name
    pub institution: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct DepartmentLookupQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub school: Option<String>,
    pub institution: Option<String>,
}
