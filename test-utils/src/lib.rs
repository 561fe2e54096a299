//! Motorpool Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the motorpool
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus factories for seeding cars, operators and assignments.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn assigns_operator() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_assignment_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
