use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{deserialize_some, Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SchoolDto {
    pub id: i32,
    pub name: String,
    pub institution: NamedRefDto,
    pub head: Option<String>,
    pub secretary: Option<String>,
    pub created_by: Option<String>,
    pub admins: Vec<String>,
    pub departments: Vec<NamedRefDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateSchoolDto {
    pub name: String,
    pub institution: Lookup,
    #[serde(default)]
    pub head: Option<Lookup>,
    #[serde(default)]
    pub secretary: Option<Lookup>,
    #[serde(default)]
    pub admins: Vec<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateSchoolDto {
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
pub struct SchoolQuery {
    /// Institution id or name
    pub institution: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct SchoolLookupQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    /// Institution id or name
    pub institution: Option<String>,
}
