use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{deserialize_some, Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct InstitutionDto {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub chancellor: Option<String>,
    pub vice_chancellor: Option<String>,
    pub created_by: Option<String>,
    /// Usernames of every admin, default role holders included.
    pub admins: Vec<String>,
    pub schools: Vec<NamedRefDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateInstitutionDto {
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub chancellor: Option<Lookup>,
    #[serde(default)]
    pub vice_chancellor: Option<Lookup>,
    #[serde(default)]
    pub admins: Vec<Lookup>,
}

/// Partial update. Role fields may be set to `null` to clear them.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateInstitutionDto {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Lookup>)]
    pub chancellor: Option<Option<Lookup>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Lookup>)]
    pub vice_chancellor: Option<Option<Lookup>>,
    #[serde(default)]
    pub admins: Vec<Lookup>,
    #[serde(default)]
    pub remove_admins: Vec<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaginatedInstitutionsDto {
    pub institutions: Vec<InstitutionDto>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
    pub total_pages: u64,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct InstitutionQuery {
    /// Case-insensitive category filter
    pub category: Option<String>,
    /// Page number (default: 0)
    pub page: Option<u64>,
    /// Items per page (default: 10)
    pub entries: Option<u64>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct InstitutionLookupQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
}
