//! HTTP request handlers.
//!
//! Controllers extract path, query, body and actor, convert DTOs to service
//! parameters, call the service layer and convert the results back to DTOs.

pub mod assignment;
pub mod operator;
