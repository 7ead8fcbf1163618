//! Domain models and operation parameters.
//!
//! Domain models are assembled by services from entities and their related records, then
//! converted into DTOs by controllers. Parameter types carry validated request data into
//! the service layer.

pub mod admin;
pub mod category;
pub mod club;
pub mod course;
pub mod department;
pub mod document;
pub mod institution;
pub mod lecture;
pub mod lecturer;
pub mod lookup;
pub mod page;
pub mod reference;
pub mod school;
pub mod student;
pub mod topic;
pub mod user;
