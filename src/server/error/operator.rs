use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::{domain_error_response, ErrorKind};

/// Failures of operator administration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// A required input is empty. The payload names the field.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// An update tried to blank out a name. The payload names the field.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("invalid email format")]
    InvalidEmail,

    #[error("employee number already exists")]
    DuplicateEmployeeNumber,

    #[error("operator not found")]
    NotFound,

    /// Soft delete refused while the operator still drives a car.
    #[error("cannot delete operator with active car assignment")]
    HasActiveAssignment,
}

impl OperatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_) | Self::EmptyField(_) | Self::InvalidEmail => {
                ErrorKind::Validation
            }
            Self::DuplicateEmployeeNumber => ErrorKind::Conflict,
            Self::NotFound => ErrorKind::NotFound,
            Self::HasActiveAssignment => ErrorKind::Precondition,
        }
    }
}

impl IntoResponse for OperatorError {
    fn into_response(self) -> Response {
        domain_error_response(self.kind(), self.to_string())
    }
}
