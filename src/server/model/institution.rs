//! Domain & parameter models for institution operations.

use crate::{
    model::{
        api::Lookup,
        institution::{
            CreateInstitutionDto, InstitutionDto, PaginatedInstitutionsDto, UpdateInstitutionDto,
        },
    },
    server::model::{
        page::Page,
        reference::{named_dtos, usernames, NamedRef, UserRef, Usernames},
    },
};

/// The institution domain model with its people and schools resolved.
#[derive(Debug, Clone)]
pub struct Institution {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub chancellor: Option<UserRef>,
    pub vice_chancellor: Option<UserRef>,
    pub created_by: Option<UserRef>,
    pub admins: Vec<UserRef>,
    pub schools: Vec<NamedRef>,
}

impl Institution {
    /// Assembles the domain model from the entity and its related records.
    pub fn from_parts(
        entity: entity::institution::Model,
        users: &Usernames,
        admin_ids: impl IntoIterator<Item = i32>,
        schools: Vec<NamedRef>,
    ) -> Self {
        Self {
            id: entity.id,
            category: entity.category,
            name: entity.name,
            chancellor: users.get(entity.chancellor_id),
            vice_chancellor: users.get(entity.vice_chancellor_id),
            created_by: users.get(entity.created_by_id),
            admins: users.all(admin_ids),
            schools,
        }
    }

    pub fn into_dto(self) -> InstitutionDto {
        InstitutionDto {
            id: self.id,
            category: self.category,
            name: self.name,
            chancellor: self.chancellor.map(|user| user.username),
            vice_chancellor: self.vice_chancellor.map(|user| user.username),
            created_by: self.created_by.map(|user| user.username),
            admins: usernames(self.admins),
            schools: named_dtos(self.schools),
        }
    }
}

/// Role fields of an institution whose holders are default admins.
pub fn role_holders(entity: &entity::institution::Model) -> [Option<i32>; 3] {
    [
        entity.chancellor_id,
        entity.vice_chancellor_id,
        entity.created_by_id,
    ]
}

impl Page<Institution> {
    pub fn into_dto(self) -> PaginatedInstitutionsDto {
        PaginatedInstitutionsDto {
            total: self.total,
            page: self.page,
            entries: self.per_page,
            total_pages: self.total_pages,
            institutions: self
                .items
                .into_iter()
                .map(Institution::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a new institution on behalf of `created_by`.
#[derive(Debug, Clone)]
pub struct CreateInstitutionParams {
    pub category: String,
    pub name: String,
    pub chancellor: Option<Lookup>,
    pub vice_chancellor: Option<Lookup>,
    pub admins: Vec<Lookup>,
    pub created_by: i32,
}

impl CreateInstitutionParams {
    pub fn from_dto(dto: CreateInstitutionDto, created_by: i32) -> Self {
        Self {
            category: dto.category,
            name: dto.name,
            chancellor: dto.chancellor,
            vice_chancellor: dto.vice_chancellor,
            admins: dto.admins,
            created_by,
        }
    }
}

/// Parameters for a partial institution update.
#[derive(Debug, Clone, Default)]
pub struct UpdateInstitutionParams {
    pub category: Option<String>,
    pub name: Option<String>,
    pub chancellor: Option<Option<Lookup>>,
    pub vice_chancellor: Option<Option<Lookup>>,
    pub admins: Vec<Lookup>,
    pub remove_admins: Vec<Lookup>,
}

impl From<UpdateInstitutionDto> for UpdateInstitutionParams {
    fn from(dto: UpdateInstitutionDto) -> Self {
        Self {
            category: dto.category,
            name: dto.name,
            chancellor: dto.chancellor,
            vice_chancellor: dto.vice_chancellor,
            admins: dto.admins,
            remove_admins: dto.remove_admins,
        }
    }
}
