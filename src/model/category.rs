use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CategoryNameDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BulkCategoryNamesDto {
    pub names: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BulkDeleteCategoriesDto {
    /// Stored names of the deleted categories
    pub deleted: Vec<String>,
    /// Requested names that matched nothing
    pub not_found: Vec<String>,
}
