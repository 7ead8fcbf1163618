//! Domain & parameter models for school operations.

use crate::{
    model::{
        api::Lookup,
        school::{CreateSchoolDto, SchoolDto, UpdateSchoolDto},
    },
    server::model::reference::{named_dtos, usernames, NamedRef, UserRef, Usernames},
};

#[derive(Debug, Clone)]
pub struct School {
    pub id: i32,
    pub name: String,
    pub institution: NamedRef,
    pub head: Option<UserRef>,
    pub secretary: Option<UserRef>,
    pub created_by: Option<UserRef>,
    pub admins: Vec<UserRef>,
    pub departments: Vec<NamedRef>,
}

impl School {
    pub fn from_parts(
        entity: entity::school::Model,
        institution: NamedRef,
        users: &Usernames,
        admin_ids: impl IntoIterator<Item = i32>,
        departments: Vec<NamedRef>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            institution,
            head: users.get(entity.head_id),
            secretary: users.get(entity.secretary_id),
            created_by: users.get(entity.created_by_id),
            admins: users.all(admin_ids),
            departments,
        }
    }

    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            id: self.id,
            name: self.name,
            institution: self.institution.into_dto(),
            head: self.head.map(|user| user.username),
            secretary: self.secretary.map(|user| user.username),
            created_by: self.created_by.map(|user| user.username),
            admins: usernames(self.admins),
            departments: named_dtos(self.departments),
        }
    }
}

pub fn role_holders(entity: &entity::school::Model) -> [Option<i32>; 3] {
    [entity.head_id, entity.secretary_id, entity.created_by_id]
}

#[derive(Debug, Clone)]
pub struct CreateSchoolParams {
    pub name: String,
    pub institution_id: i32,
    pub head: Option<Lookup>,
    pub secretary: Option<Lookup>,
    pub admins: Vec<Lookup>,
    pub created_by: i32,
}

impl CreateSchoolParams {
    /// Builds params once the controller has resolved and authorized the institution.
    pub fn from_dto(dto: CreateSchoolDto, institution_id: i32, created_by: i32) -> Self {
        Self {
            name: dto.name,
            institution_id,
            head: dto.head,
            secretary: dto.secretary,
            admins: dto.admins,
            created_by,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSchoolParams {
    pub name: Option<String>,
    pub head: Option<Option<Lookup>>,
    pub secretary: Option<Option<Lookup>>,
    pub admins: Vec<Lookup>,
    pub remove_admins: Vec<Lookup>,
}

impl From<UpdateSchoolDto> for UpdateSchoolParams {
    fn from(dto: UpdateSchoolDto) -> Self {
        Self {
            name: dto.name,
            head: dto.head,
            secretary: dto.secretary,
            admins: dto.admins,
            remove_admins: dto.remove_admins,
        }
    }
}
