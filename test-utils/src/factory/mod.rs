//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through SeaORM active models,
//! bypassing the services under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let car = factory::create_car(&db).await?;
//!     let operator = factory::create_operator(&db).await?;
//!
//!     // Create an active assignment with its car and operator
//!     let (car, operator, assignment) =
//!         factory::helpers::create_active_assignment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::car::CarStatus;
//! use test_utils::factory;
//!
//! let car = factory::car::CarFactory::new(&db)
//!     .status(CarStatus::Maintenance)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `car` - Create car entities
//! - `operator` - Create car operator entities
//! - `assignment` - Create car-operator assignment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod assignment;
pub mod car;
pub mod helpers;
pub mod operator;

pub use assignment::create_assignment;
pub use car::create_car;
pub use operator::create_operator;
