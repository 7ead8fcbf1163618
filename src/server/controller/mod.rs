//! HTTP request handlers.
//!
//! Controllers extract request data, check permissions through `AuthGuard`, convert DTOs
//! into service parameters and map service results back into DTOs. Read endpoints are
//! public; every mutating endpoint requires a bearer token.

pub mod account;
pub mod category;
pub mod club;
pub mod course;
pub mod department;
pub mod document;
pub mod health;
pub mod institution;
pub mod lecture;
pub mod lecturer;
pub mod school;
pub mod student;
pub mod topic;
pub mod unit;
