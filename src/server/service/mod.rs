//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They resolve `Lookup`
//! references, enforce uniqueness and placement rules, keep admin and membership sets
//! consistent, and run every mutation inside a single database transaction. Permission
//! checks happen in the controllers before a service is called.

pub mod account;
pub mod category;
pub mod club;
pub mod course;
pub mod department;
pub mod document;
pub mod institution;
pub mod lecture;
pub mod lecturer;
pub mod resolve;
pub mod school;
pub mod student;
pub mod topic;
pub mod unit;

#[cfg(test)]
mod test;
