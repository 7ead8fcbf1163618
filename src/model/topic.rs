use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{deserialize_some, Lookup, NamedRefDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TopicDto {
    pub id: i32,
    pub name: String,
    pub start_page: Option<i32>,
    pub end_page: Option<i32>,
    pub documents: Vec<NamedRefDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateTopicDto {
    pub name: String,
    #[serde(default)]
    pub start_page: Option<i32>,
    #[serde(default)]
    pub end_page: Option<i32>,
    /// Document ids or titles
    #[serde(default)]
    pub documents: Vec<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateTopicDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub start_page: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub end_page: Option<Option<i32>>,
    #[serde(default)]
    pub documents: Option<Vec<Lookup>>,
}
