//! Data transfer objects shared by the HTTP API.

pub mod account;
pub mod api;
pub mod category;
pub mod club;
pub mod course;
pub mod department;
pub mod document;
pub mod institution;
pub mod lecture;
pub mod lecturer;
pub mod school;
pub mod student;
pub mod topic;
pub mod unit;
