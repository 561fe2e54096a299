//! Request and response DTOs of the HTTP API.
//!
//! Field names are serialized in camelCase and dates as `YYYY-MM-DD`.

pub mod api;
pub mod assignment;
pub mod operator;
