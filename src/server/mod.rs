//! Server-side API backend and business logic.
//!
//! This module contains the backend implementation of the fleet operator assignment
//! service: API endpoints, the assignment engine, operator administration and data
//! access. The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Assignment engine and operator administration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request extractors (acting user)
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations, CORS and shutdown
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** extracts the acting user from the request
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** validates input, enforces assignment rules, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO and returns the HTTP response
//!
//! # Concurrency
//!
//! At most one active assignment per car and per operator is enforced by partial
//! unique indexes in the database, not by in-process locks. Services pre-check for a
//! friendlier early failure and translate index violations into the same conflict.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
