//! Domain & parameter models for lecturer operations.

use crate::{
    model::{
        api::Lookup,
        lecturer::{CreateLecturerDto, LecturerDto, UpdateLecturerDto},
    },
    server::model::reference::{named_dtos, NamedRef, UserRef},
};

#[derive(Debug, Clone)]
pub struct Lecturer {
    pub id: i32,
    pub user: UserRef,
    pub institution: Option<NamedRef>,
    pub departments: Vec<NamedRef>,
}

impl Lecturer {
    pub fn into_dto(self) -> LecturerDto {
        LecturerDto {
            id: self.id,
            user_id: self.user.id,
            username: self.user.username,
            institution: self.institution.map(NamedRef::into_dto),
            departments: named_dtos(self.departments),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLecturerParams {
    pub user_id: i32,
    pub institution_id: Option<i32>,
    pub departments: Vec<Lookup>,
}

impl CreateLecturerParams {
    pub fn from_dto(dto: CreateLecturerDto, user_id: i32, institution_id: Option<i32>) -> Self {
        Self {
            user_id,
            institution_id,
            departments: dto.departments,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLecturerParams {
    pub institution: Option<Option<Lookup>>,
    pub departments: Option<Vec<Lookup>>,
}

impl From<UpdateLecturerDto> for UpdateLecturerParams {
    fn from(dto: UpdateLecturerDto) -> Self {
        Self {
            institution: dto.institution,
            departments: dto.departments,
        }
    }
}

/// Filters for listing lecturers.
#[derive(Debug, Clone, Default)]
pub struct LecturerFilter {
    pub institution: Option<Lookup>,
    pub department: Option<Lookup>,
}
