use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::{
    error::{domain_error_response, ErrorKind},
    model::assignment::ActiveAssignmentConflict,
};

/// Failures of the assignment engine.
///
/// Each variant carries the exact message returned to the caller. Conflicts read the
/// same whether the engine's pre-check or the storage index caught them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// A required input is empty. The payload names the field ("car ID", "start date", ...).
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A date input is not `YYYY-MM-DD`. The payload names the field.
    #[error("invalid {0} format. Expected: YYYY-MM-DD")]
    InvalidDate(&'static str),

    #[error("start date cannot be more than {max_days} days in the past")]
    StartDateTooOld { max_days: i64 },

    #[error("car not found")]
    CarNotFound,

    #[error("car must be active to assign an operator")]
    CarNotActive,

    #[error("operator not found")]
    OperatorNotFound,

    #[error("operator must be active to be assigned")]
    OperatorNotActive,

    #[error("operator already has an active car assignment")]
    OperatorAlreadyAssigned,

    #[error("car already has an active operator assignment")]
    CarAlreadyAssigned,

    /// Unassign found nothing to close, including when a concurrent unassign won.
    #[error("no active assignment found for this car")]
    NoActiveAssignment,

    #[error("end date must be on or after start date")]
    EndDateBeforeStartDate,
}

impl AssignmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_) | Self::InvalidDate(_) => ErrorKind::Validation,
            Self::CarNotFound | Self::OperatorNotFound | Self::NoActiveAssignment => {
                ErrorKind::NotFound
            }
            Self::OperatorAlreadyAssigned | Self::CarAlreadyAssigned => ErrorKind::Conflict,
            Self::StartDateTooOld { .. }
            | Self::CarNotActive
            | Self::OperatorNotActive
            | Self::EndDateBeforeStartDate => ErrorKind::Precondition,
        }
    }
}

impl From<ActiveAssignmentConflict> for AssignmentError {
    fn from(conflict: ActiveAssignmentConflict) -> Self {
        match conflict {
            ActiveAssignmentConflict::Car => Self::CarAlreadyAssigned,
            ActiveAssignmentConflict::Operator => Self::OperatorAlreadyAssigned,
        }
    }
}

impl IntoResponse for AssignmentError {
    fn into_response(self) -> Response {
        domain_error_response(self.kind(), self.to_string())
    }
}
