//! Domain models for operator-car assignments.
//!
//! Defines the assignment record, the parameters accepted by the assignment engine,
//! and the history filter understood by the repository.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::assignment::{
        AssignOperatorDto, AssignmentDto, AssignmentQueryDto, UnassignOperatorDto,
    },
    server::{error::assignment::AssignmentError, util::date::parse_iso_date},
};

/// A period during which an operator drives a car.
///
/// `end_date == None` marks the active assignment. Once set, `end_date` is never
/// cleared; reassigning creates a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// ID of the assigned car.
    pub car_id: String,
    /// ID of the assigned operator.
    pub operator_id: String,
    /// First day of the assignment.
    pub start_date: NaiveDate,
    /// Last day of the assignment, `None` while active.
    pub end_date: Option<NaiveDate>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Timestamp when the assignment was recorded.
    pub created_at: DateTime<Utc>,
    /// ID of the administrator who recorded the assignment.
    pub created_by: String,
}

impl Assignment {
    /// Converts an entity model to an assignment domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Assignment` - The converted assignment domain model
    pub fn from_entity(entity: entity::car_operator_assignment::Model) -> Self {
        Self {
            id: entity.id,
            car_id: entity.car_id,
            operator_id: entity.operator_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            notes: entity.notes,
            created_at: entity.created_at,
            created_by: entity.created_by,
        }
    }

    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    /// Converts the assignment domain model to a DTO for API responses.
    pub fn into_dto(self) -> AssignmentDto {
        AssignmentDto {
            id: self.id,
            car_id: self.car_id,
            operator_id: self.operator_id,
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes,
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }
}

/// Raw input for assigning an operator to a car.
///
/// Fields arrive as caller-provided strings and are validated by the engine in a
/// fixed order before anything is read from storage.
#[derive(Debug, Clone)]
pub struct AssignToCarParams {
    /// ID of the car receiving the operator.
    pub car_id: String,
    /// ID of the operator being assigned.
    pub operator_id: String,
    /// Start date in `YYYY-MM-DD` format.
    pub start_date: String,
    /// Optional notes stored on the assignment.
    pub notes: Option<String>,
}

impl AssignToCarParams {
    /// Combines the car ID from the request path with the request body.
    pub fn from_dto(car_id: String, dto: AssignOperatorDto) -> Self {
        Self {
            car_id,
            operator_id: dto.operator_id,
            start_date: dto.start_date,
            notes: dto.notes,
        }
    }
}

/// Raw input for ending the active assignment of a car.
#[derive(Debug, Clone)]
pub struct UnassignFromCarParams {
    /// ID of the car whose active assignment is closed.
    pub car_id: String,
    /// End date in `YYYY-MM-DD` format.
    pub end_date: String,
    /// Notes replacing the stored notes when present.
    pub notes: Option<String>,
}

impl UnassignFromCarParams {
    /// Combines the car ID from the request path with the request body.
    pub fn from_dto(car_id: String, dto: UnassignOperatorDto) -> Self {
        Self {
            car_id,
            end_date: dto.end_date,
            notes: dto.notes,
        }
    }
}

/// Validated values for inserting a new active assignment.
#[derive(Debug, Clone)]
pub struct CreateAssignmentParams {
    pub car_id: String,
    pub operator_id: String,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
    pub created_by: String,
}

/// Whose active assignment to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentSubject {
    Car(String),
    Operator(String),
}

/// Filters for assignment history queries.
///
/// All present filters are combined with AND semantics. Results are ordered by
/// start date, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentFilter {
    /// Restrict to one car.
    pub car_id: Option<String>,
    /// Restrict to one operator.
    pub operator_id: Option<String>,
    /// `Some(true)` keeps only active rows, `Some(false)` only closed rows.
    pub active_only: Option<bool>,
    /// Keep rows starting on or after this date.
    pub from: Option<NaiveDate>,
    /// Keep rows that are still active or ended on or before this date.
    pub to: Option<NaiveDate>,
}

impl AssignmentFilter {
    pub fn for_car(car_id: impl Into<String>) -> Self {
        Self {
            car_id: Some(car_id.into()),
            ..Default::default()
        }
    }

    pub fn for_operator(operator_id: impl Into<String>) -> Self {
        Self {
            operator_id: Some(operator_id.into()),
            ..Default::default()
        }
    }

    /// Builds a filter from query parameters, parsing the date range.
    ///
    /// # Returns
    /// - `Ok(AssignmentFilter)`: The parsed filter; blank values are ignored
    /// - `Err(AssignmentError::InvalidDate)`: `from` or `to` is not `YYYY-MM-DD`
    pub fn from_dto(dto: AssignmentQueryDto) -> Result<Self, AssignmentError> {
        let from = parse_optional_date(dto.from, "from date")?;
        let to = parse_optional_date(dto.to, "to date")?;

        Ok(Self {
            car_id: dto.car_id.filter(|id| !id.trim().is_empty()),
            operator_id: dto.operator_id.filter(|id| !id.trim().is_empty()),
            active_only: dto.active,
            from,
            to,
        })
    }
}

fn parse_optional_date(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<NaiveDate>, AssignmentError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => parse_iso_date(&v)
            .map(Some)
            .ok_or(AssignmentError::InvalidDate(field)),
        None => Ok(None),
    }
}

/// Which active-assignment guard rejected an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveAssignmentConflict {
    Car,
    Operator,
}

/// Result of the conditional close of an active assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    /// The row was active and is now closed.
    Closed(Assignment),
    /// The row does not exist or was already closed by another caller.
    NotActive,
}
