use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, AuthToken};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(AuthToken)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the account tables.
    ///
    /// - User
    /// - AuthToken
    pub fn with_account_tables(self) -> Self {
        self.with_table(User).with_table(AuthToken)
    }

    /// Adds the organizational hierarchy tables along with their admin junctions.
    ///
    /// Includes the account tables followed by Institution, School, Department,
    /// Course and Unit.
    pub fn with_organization_tables(self) -> Self {
        self.with_account_tables()
            .with_table(Institution)
            .with_table(InstitutionAdmin)
            .with_table(School)
            .with_table(SchoolAdmin)
            .with_table(Department)
            .with_table(DepartmentAdmin)
            .with_table(Course)
            .with_table(Unit)
    }

    /// Adds every table of the academic directory in dependency order.
    ///
    /// Use this when testing functionality that crosses several resources, such as
    /// lectures (lecturer, unit, documents) or student documents.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_directory_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_directory_tables(self) -> Self {
        self.with_organization_tables()
            .with_table(Lecturer)
            .with_table(LecturerDepartment)
            .with_table(Category)
            .with_table(Document)
            .with_table(DocumentCategory)
            .with_table(Topic)
            .with_table(TopicDocument)
            .with_table(Lecture)
            .with_table(LectureDocument)
            .with_table(Student)
            .with_table(ClubSociety)
            .with_table(ClubSocietyAdmin)
            .with_table(ClubSocietyMember)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
