//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an institution, school and department all administered by `user`.
///
/// The user is set as creator at every level, which also makes them an admin of each.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User acting as creator and admin of the hierarchy
///
/// # Returns
/// - `Ok((institution, school, department))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hierarchy_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<
    (
        entity::institution::Model,
        entity::school::Model,
        entity::department::Model,
    ),
    DbErr,
> {
    let institution = crate::factory::institution::create_institution(db, user.id).await?;
    let school = crate::factory::school::create_school(db, institution.id, user.id).await?;
    let department = crate::factory::department::create_department(db, school.id, user.id).await?;

    Ok((institution, school, department))
}
