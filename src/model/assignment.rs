use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    pub id: String,
    pub car_id: String,
    pub operator_id: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// Body of `POST /api/cars/{car_id}/assign`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignOperatorDto {
    #[serde(default)]
    pub operator_id: String,
    #[serde(default)]
    pub start_date: String, // Format: "YYYY-MM-DD"
    pub notes: Option<String>,
}

/// Body of `POST /api/cars/{car_id}/unassign`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UnassignOperatorDto {
    #[serde(default)]
    pub end_date: String, // Format: "YYYY-MM-DD"
    pub notes: Option<String>,
}

/// Query string of `GET /api/assignments`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentQueryDto {
    pub car_id: Option<String>,
    pub operator_id: Option<String>,
    pub active: Option<bool>,
    pub from: Option<String>,
    pub to: Option<String>,
}
