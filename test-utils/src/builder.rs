use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

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
/// use entity::prelude::{Instructor, Classroom};
///
/// let test = TestBuilder::new()
///     .with_table(Instructor)
///     .with_table(Classroom)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index the entity definitions cannot express, such as a composite
    /// unique key created by a migration.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the user account tables: admin, instructor and student.
    pub fn with_account_tables(self) -> Self {
        self.with_table(Admin)
            .with_table(Instructor)
            .with_table(Student)
    }

    /// Adds the tables needed for classroom operations.
    ///
    /// Includes the account tables followed by classroom and its schedule.
    pub fn with_classroom_tables(self) -> Self {
        self.with_account_tables()
            .with_table(Classroom)
            .with_table(ClassroomSchedule)
    }

    /// Adds every table in the school schema in dependency order.
    ///
    /// Equivalent to `with_classroom_tables()` followed by the enrollment and
    /// student file tables, plus the unique (classroom, student) enrollment index.
    pub fn with_school_tables(self) -> Self {
        self.with_classroom_tables()
            .with_table(Enrollment)
            .with_table(StudentFile)
            .with_index(
                Index::create()
                    .name("idx_enrollment_classroom_student")
                    .table(Enrollment)
                    .col(entity::enrollment::Column::ClassroomId)
                    .col(entity::enrollment::Column::StudentId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
