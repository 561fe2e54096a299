//! SeaORM entities for the motorpool schema.

pub mod prelude;

pub mod action_log;
pub mod car;
pub mod car_operator;
pub mod car_operator_assignment;
