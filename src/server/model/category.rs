//! Domain models for category operations.

use crate::model::category::CategoryDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Outcome of a bulk delete by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeleteResult {
    pub deleted: Vec<String>,
    pub not_found: Vec<String>,
}
