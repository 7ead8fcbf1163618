use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{deserialize_some, Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LecturerDto {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub institution: Option<NamedRefDto>,
    pub departments: Vec<NamedRefDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreateLecturerDto {
    /// Account to register as a lecturer, defaults to the caller
    #[serde(default)]
    pub user: Option<Lookup>,
    #[serde(default)]
    pub institution: Option<Lookup>,
    #[serde(default)]
    pub departments: Vec<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateLecturerDto {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Lookup>)]
    pub institution: Option<Option<Lookup>>,
    /// Replaces the full department list when present
    #[serde(default)]
    pub departments: Option<Vec<Lookup>>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct LecturerQuery {
    pub institution: Option<String>,
    pub department: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct LecturerLookupQuery {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub institution: Option<String>,
}
