//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity of the academic directory. Repositories are generic over `ConnectionTrait` so the
//! services can run them either directly on the pool or inside a transaction. They return
//! SeaORM entity models; services assemble those into domain models.

pub mod admin;
pub mod category;
pub mod club;
pub mod course;
pub mod department;
pub mod document;
pub mod filter;
pub mod institution;
pub mod lecture;
pub mod lecturer;
pub mod school;
pub mod student;
pub mod topic;
pub mod unit;
pub mod user;

#[cfg(test)]
mod test;
