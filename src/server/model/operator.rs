//! Domain models for car operators.

use chrono::{DateTime, NaiveDate, Utc};

use super::assignment::Assignment;
use crate::model::operator::{
    CreateOperatorDto, CurrentCarDto, OperatorDetailDto, OperatorDto, OperatorListItemDto,
    OperatorQueryDto, UpdateOperatorDto,
};

/// An employee authorized to drive fleet vehicles.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    /// Unique identifier for the operator.
    pub id: String,
    /// Immutable business key.
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    /// Soft-delete flag; inactive operators cannot receive new assignments.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl Operator {
    /// Converts an entity model to an operator domain model at the repository boundary.
    pub fn from_entity(entity: entity::car_operator::Model) -> Self {
        Self {
            id: entity.id,
            employee_number: entity.employee_number,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            department: entity.department,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            created_by: entity.created_by,
        }
    }

    /// Converts the operator domain model to a DTO for API responses.
    pub fn into_dto(self) -> OperatorDto {
        OperatorDto {
            id: self.id,
            employee_number: self.employee_number,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            department: self.department,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Operator with its current assignment and full assignment history.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorDetail {
    pub operator: Operator,
    pub current_assignment: Option<Assignment>,
    /// Every assignment of the operator, newest start date first.
    pub assignment_history: Vec<Assignment>,
}

impl OperatorDetail {
    pub fn into_dto(self) -> OperatorDetailDto {
        OperatorDetailDto {
            operator: self.operator.into_dto(),
            current_assignment: self.current_assignment.map(Assignment::into_dto),
            assignment_history: self
                .assignment_history
                .into_iter()
                .map(Assignment::into_dto)
                .collect(),
        }
    }
}

/// The car behind an operator's active assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCar {
    pub car_id: String,
    pub license_plate: String,
    /// Start date of the active assignment.
    pub since: NaiveDate,
}

/// Operator row of the listing, joined with its active assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorWithCurrentCar {
    pub operator: Operator,
    pub current_car: Option<CurrentCar>,
}

impl OperatorWithCurrentCar {
    pub fn into_dto(self) -> OperatorListItemDto {
        OperatorListItemDto {
            operator: self.operator.into_dto(),
            current_car: self.current_car.map(|car| CurrentCarDto {
                id: car.car_id,
                license_plate: car.license_plate,
                since: car.since,
            }),
        }
    }
}

/// Filter for listing operators; every criterion is optional and they combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatorFilter {
    pub is_active: Option<bool>,
    /// Exact department match.
    pub department: Option<String>,
    /// Substring of first name, last name, employee number or email.
    pub search: Option<String>,
}

impl OperatorFilter {
    pub fn from_dto(dto: OperatorQueryDto) -> Self {
        Self {
            is_active: dto.is_active,
            department: dto.department,
            search: dto.search,
        }
    }
}

/// Parameters for creating a new operator.
#[derive(Debug, Clone)]
pub struct CreateOperatorParams {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

impl CreateOperatorParams {
    pub fn from_dto(dto: CreateOperatorDto) -> Self {
        Self {
            employee_number: dto.employee_number,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            department: dto.department,
        }
    }
}

/// Parameters for updating an operator.
///
/// Only provided fields are updated. The employee number is immutable.
#[derive(Debug, Clone, Default)]
pub struct UpdateOperatorParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateOperatorParams {
    pub fn from_dto(dto: UpdateOperatorDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            department: dto.department,
            is_active: dto.is_active,
        }
    }
}

/// Validated, already-diffed column changes applied by the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatorChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub department: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl OperatorChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
