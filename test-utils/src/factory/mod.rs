//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Admin-bearing factories also insert the default admin
//! rows for their role holders so seeded data satisfies the same invariants the services
//! maintain.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (user, token) = factory::create_user_with_token(&db).await?;
//! let (institution, school, department) =
//!     factory::helpers::create_hierarchy_for_user(&db, &user).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users and auth tokens
//! - `institution`, `school`, `department` - Admin-bearing organization levels
//! - `course` - Courses and units
//! - `club` - Clubs/societies with member and admin rows
//! - `document` - Document rows and categories
//! - `helpers` - Unique id generation and whole-hierarchy helpers

pub mod club;
pub mod course;
pub mod department;
pub mod document;
pub mod helpers;
pub mod institution;
pub mod school;
pub mod user;

pub use club::create_club;
pub use course::{create_course, create_unit};
pub use department::create_department;
pub use document::{create_category, create_document};
pub use institution::create_institution;
pub use school::create_school;
pub use user::{create_user, create_user_named, create_user_with_token};
