//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type; domain errors (`AssignmentError`, `OperatorError`) carry their own caller-facing
//! messages and an `ErrorKind` that decides the status code.

pub mod assignment;
pub mod auth;
pub mod config;
pub mod operator;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        assignment::AssignmentError, auth::AuthError, config::ConfigError,
        operator::OperatorError,
    },
};

/// Classification shared by every domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input. 400 Bad Request.
    Validation,
    /// A referenced car, operator or active assignment is absent. 404 Not Found.
    NotFound,
    /// An active assignment already exists. 409 Conflict.
    Conflict,
    /// Input is well formed but a business rule forbids the operation. 400 Bad Request.
    Precondition,
}

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation | Self::Precondition => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
        }
    }
}

/// Builds the JSON error body returned for domain errors.
pub(crate) fn domain_error_response(kind: ErrorKind, message: String) -> Response {
    (kind.status_code(), Json(ErrorDto { error: message })).into_response()
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Storage errors are logged server-side and
/// reach the caller only as a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The request carries no actor identity.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Assignment engine rejection; message is surfaced verbatim.
    #[error(transparent)]
    AssignmentErr(#[from] AssignmentError),

    /// Operator administration rejection; message is surfaced verbatim.
    #[error(transparent)]
    OperatorErr(#[from] OperatorError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - validation and precondition failures
/// - 401 Unauthorized - missing actor
/// - 404 Not Found - missing car, operator or active assignment
/// - 409 Conflict - active assignment conflicts, duplicate employee numbers
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::AssignmentErr(err) => err.into_response(),
            Self::OperatorErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
