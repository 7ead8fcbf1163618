use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{deserialize_some, Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct StudentDto {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub institution: Option<NamedRefDto>,
    pub school: Option<NamedRefDto>,
    pub department: Option<NamedRefDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreateStudentDto {
    /// Account to register as a student, defaults to the caller
    #[serde(default)]
    pub user: Option<Lookup>,
    #[serde(default)]
    pub institution: Option<Lookup>,
    #[serde(default)]
    pub school: Option<Lookup>,
    #[serde(default)]
    pub department: Option<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateStudentDto {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Lookup>)]
    pub institution: Option<Option<Lookup>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Lookup>)]
    pub school: Option<Option<Lookup>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Lookup>)]
    pub department: Option<Option<Lookup>>,
}

/// Download link for a document uploaded by a student.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct StudentDocumentDto {
    pub document_title: String,
    pub document_download_url: String,
    pub document_author: String,
    pub document_categories: Vec<String>,
    pub document_created_at: DateTime<Utc>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct StudentQuery {
    pub institution: Option<String>,
    pub school: Option<String>,
    pub department: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct StudentLookupQuery {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub institution: Option<String>,
}
