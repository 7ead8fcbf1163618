use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UnitDto {
    pub id: i32,
    pub name: String,
    pub course: NamedRefDto,
    pub created_by: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateUnitDto {
    pub name: String,
    pub course: Lookup,
    /// Narrows a course given by name
    #[serde(default)]
    pub department: Option<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateUnitDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct UnitQuery {
    /// Course id or name
    pub course: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct UnitLookupQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub course: Option<String>,
    pub department: Option<String>,
}
