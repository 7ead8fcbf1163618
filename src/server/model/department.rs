//! Domain & parameter models for department operations.

use crate::{
    model::{
        api::Lookup,
        department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    },
    server::model::reference::{named_dtos, usernames, NamedRef, UserRef, Usernames},
};

#[derive(Debug, Clone)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub school: NamedRef,
    pub institution: NamedRef,
    pub head: Option<UserRef>,
    pub secretary: Option<UserRef>,
    pub created_by: Option<UserRef>,
    pub admins: Vec<UserRef>,
    pub courses: Vec<NamedRef>,
    pub lecturers: Vec<UserRef>,
}

/// Records related to a department, fetched alongside it.
pub struct DepartmentRelations {
    pub school: NamedRef,
    pub institution: NamedRef,
    pub admin_ids: Vec<i32>,
    pub courses: Vec<NamedRef>,
    pub lecturer_user_ids: Vec<i32>,
}

impl Department {
    pub fn from_parts(
        entity: entity::department::Model,
        relations: DepartmentRelations,
        users: &Usernames,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            school: relations.school,
            institution: relations.institution,
            head: users.get(entity.head_id),
            secretary: users.get(entity.secretary_id),
            created_by: users.get(entity.created_by_id),
            admins: users.all(relations.admin_ids),
            courses: relations.courses,
            lecturers: users.all(relations.lecturer_user_ids),
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            name: self.name,
            school: self.school.into_dto(),
            institution: self.institution.into_dto(),
            head: self.head.map(|user| user.username),
            secretary: self.secretary.map(|user| user.username),
            created_by: self.created_by.map(|user| user.username),
            admins: usernames(self.admins),
            courses: named_dtos(self.courses),
            lecturers: usernames(self.lecturers),
        }
    }
}

pub fn role_holders(entity: &entity::department::Model) -> [Option<i32>; 3] {
    [entity.head_id, entity.secretary_id, entity.created_by_id]
}

#[derive(Debug, Clone)]
pub struct CreateDepartmentParams {
    pub name: String,
    pub school_id: i32,
    pub head: Option<Lookup>,
    pub secretary: Option<Lookup>,
    pub admins: Vec<Lookup>,
    pub created_by: i32,
}

impl CreateDepartmentParams {
    pub fn from_dto(dto: CreateDepartmentDto, school_id: i32, created_by: i32) -> Self {
        Self {
            name: dto.name,
            school_id,
            head: dto.head,
            secretary: dto.secretary,
            admins: dto.admins,
            created_by,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDepartmentParams {
    pub name: Option<String>,
    pub head: Option<Option<Lookup>>,
    pub secretary: Option<Option<Lookup>>,
    pub admins: Vec<Lookup>,
    pub remove_admins: Vec<Lookup>,
}

impl From<UpdateDepartmentDto> for UpdateDepartmentParams {
    fn from(dto: UpdateDepartmentDto) -> Self {
        Self {
            name: dto.name,
            head: dto.head,
            secretary: dto.secretary,
            admins: dto.admins,
            remove_admins: dto.remove_admins,
        }
    }
}
