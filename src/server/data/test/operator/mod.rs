use crate::server::{
    data::operator::{is_duplicate_employee_number, OperatorRepository},
    model::operator::{CreateOperatorParams, OperatorChanges},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn params(employee_number: &str) -> CreateOperatorParams {
    CreateOperatorParams {
        employee_number: employee_number.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: Some("ada@example.com".to_string()),
        phone: None,
        department: Some("Logistics".to_string()),
    }
}
