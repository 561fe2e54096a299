use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::assignment::AssignmentDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OperatorDto {
    pub id: String,
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OperatorDetailDto {
    #[serde(flatten)]
    pub operator: OperatorDto,
    pub current_assignment: Option<AssignmentDto>,
    pub assignment_history: Vec<AssignmentDto>,
}

/// The car an operator currently drives.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCarDto {
    pub id: String,
    pub license_plate: String,
    pub since: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OperatorListItemDto {
    #[serde(flatten)]
    pub operator: OperatorDto,
    pub current_car: Option<CurrentCarDto>,
}

/// Query string of `GET /api/operators`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperatorQueryDto {
    pub is_active: Option<bool>,
    pub department: Option<String>,
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateOperatorDto {
    #[serde(default)]
    pub employee_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

/// Partial update; absent fields are left unchanged and an empty contact field clears it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOperatorDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub is_active: Option<bool>,
}
