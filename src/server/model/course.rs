//! Domain & parameter models for course and unit operations.

use crate::{
    model::{course::CourseDto, unit::UnitDto},
    server::model::reference::{named_dtos, NamedRef, UserRef},
};

#[derive(Debug, Clone)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub department: NamedRef,
    pub created_by: Option<UserRef>,
    pub units: Vec<NamedRef>,
}

impl Course {
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            department: self.department.into_dto(),
            created_by: self.created_by.map(|user| user.username),
            units: named_dtos(self.units),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub id: i32,
    pub name: String,
    pub course: NamedRef,
    /// Department owning the unit's course, which governs who may edit it.
    pub department_id: i32,
    pub created_by: Option<UserRef>,
}

impl Unit {
    pub fn into_dto(self) -> UnitDto {
        UnitDto {
            id: self.id,
            name: self.name,
            course: self.course.into_dto(),
            created_by: self.created_by.map(|user| user.username),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub name: String,
    pub department_id: i32,
    pub created_by: i32,
}

#[derive(Debug, Clone)]
pub struct CreateUnitParams {
    pub name: String,
    pub course_id: i32,
    pub created_by: i32,
}
