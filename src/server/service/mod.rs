//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Validating input and enforcing assignment rules
//! - **Orchestration**: Coordinating repository calls for cars, operators and assignments
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Audit Side Effects**: Emitting best-effort audit entries after successful mutations

pub mod action_log;
pub mod assignment;
pub mod operator;

#[cfg(test)]
mod test;
