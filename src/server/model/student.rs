//! Domain & parameter models for student operations.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::Lookup,
        student::{StudentDocumentDto, StudentDto, UpdateStudentDto},
    },
    server::model::reference::{NamedRef, UserRef},
};

#[derive(Debug, Clone)]
pub struct Student {
    pub id: i32,
    pub user: UserRef,
    pub institution: Option<NamedRef>,
    pub school: Option<NamedRef>,
    pub department: Option<NamedRef>,
}

impl Student {
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            user_id: self.user.id,
            username: self.user.username,
            institution: self.institution.map(NamedRef::into_dto),
            school: self.school.map(NamedRef::into_dto),
            department: self.department.map(NamedRef::into_dto),
        }
    }
}

/// A document uploaded by a student, shaped as a download link.
#[derive(Debug, Clone)]
pub struct StudentDocument {
    pub title: String,
    pub download_url: String,
    pub author: String,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl StudentDocument {
    pub fn into_dto(self) -> StudentDocumentDto {
        StudentDocumentDto {
            document_title: self.title,
            document_download_url: self.download_url,
            document_author: self.author,
            document_categories: self.categories,
            document_created_at: self.created_at,
        }
    }
}

/// Academic placement of a student. Each level must sit within the one above it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentPlacement {
    pub institution_id: Option<i32>,
    pub school_id: Option<i32>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub user_id: i32,
    pub institution: Option<Lookup>,
    pub school: Option<Lookup>,
    pub department: Option<Lookup>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub institution: Option<Option<Lookup>>,
    pub school: Option<Option<Lookup>>,
    pub department: Option<Option<Lookup>>,
}

impl From<UpdateStudentDto> for UpdateStudentParams {
    fn from(dto: UpdateStudentDto) -> Self {
        Self {
            institution: dto.institution,
            school: dto.school,
            department: dto.department,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub institution: Option<Lookup>,
    pub school: Option<Lookup>,
    pub department: Option<Lookup>,
}
