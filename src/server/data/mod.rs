//! Database repository layer.
//!
//! Repositories handle the SeaORM queries for each table and return domain models
//! from `server::model`, keeping entity types out of the service layer.

pub mod action_log;
pub mod assignment;
pub mod car;
pub mod operator;
