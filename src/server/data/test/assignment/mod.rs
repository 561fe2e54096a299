use crate::server::{
    data::assignment::{AssignmentRepository, InsertAssignmentError},
    model::assignment::{
        ActiveAssignmentConflict, AssignmentFilter, CloseOutcome, CreateAssignmentParams,
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod insert;
mod query_history;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn params(car_id: &str, operator_id: &str, start_date: NaiveDate) -> CreateAssignmentParams {
    CreateAssignmentParams {
        car_id: car_id.to_string(),
        operator_id: operator_id.to_string(),
        start_date,
        notes: None,
        created_by: "admin-1".to_string(),
    }
}
