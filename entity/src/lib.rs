//! SeaORM entity definitions for the academic directory schema.

pub mod prelude;

pub mod auth_token;
pub mod category;
pub mod club_society;
pub mod club_society_admin;
pub mod club_society_member;
pub mod course;
pub mod department;
pub mod department_admin;
pub mod document;
pub mod document_category;
pub mod institution;
pub mod institution_admin;
pub mod lecture;
pub mod lecture_document;
pub mod lecturer;
pub mod lecturer_department;
pub mod school;
pub mod school_admin;
pub mod student;
pub mod topic;
pub mod topic_document;
pub mod unit;
pub mod user;
