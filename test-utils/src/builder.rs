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
/// use entity::prelude::{Car, CarOperator};
///
/// let test = TestBuilder::new()
///     .with_table(Car)
///     .with_table(CarOperator)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// Raw DDL executed after all tables exist.
    statements: Vec<&'static str>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the partial unique indexes guarding active assignments.
    ///
    /// Uses the same DDL as the production migration so the race guard in tests
    /// matches the deployed schema. Requires the `CarOperatorAssignment` table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_active_assignment_indexes(mut self) -> Self {
        self.statements
            .push(migration::CREATE_ACTIVE_CAR_ASSIGNMENT_INDEX);
        self.statements
            .push(migration::CREATE_ACTIVE_OPERATOR_ASSIGNMENT_INDEX);
        self
    }

    /// Adds the car, operator and assignment tables with the active-assignment indexes,
    /// without the audit log table.
    ///
    /// Useful for verifying that mutations survive a failing audit sink.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_assignment_tables_without_audit(self) -> Self {
        self.with_table(Car)
            .with_table(CarOperator)
            .with_table(CarOperatorAssignment)
            .with_active_assignment_indexes()
    }

    /// Adds every table needed by the assignment engine.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Car
    /// - CarOperator
    /// - CarOperatorAssignment (with active-assignment indexes)
    /// - ActionLog
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_assignment_tables(self) -> Self {
        self.with_assignment_tables_without_audit()
            .with_table(ActionLog)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_raw_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
