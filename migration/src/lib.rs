pub use sea_orm_migration::prelude::*;

mod m20250106_000001_create_car_table;
mod m20250106_000002_create_car_operator_table;
mod m20250108_000003_create_car_operator_assignment_table;
mod m20250108_000004_create_action_log_table;

pub use m20250108_000003_create_car_operator_assignment_table::{
    ACTIVE_CAR_ASSIGNMENT_INDEX, ACTIVE_OPERATOR_ASSIGNMENT_INDEX,
    CREATE_ACTIVE_CAR_ASSIGNMENT_INDEX, CREATE_ACTIVE_OPERATOR_ASSIGNMENT_INDEX,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250106_000001_create_car_table::Migration),
            Box::new(m20250106_000002_create_car_operator_table::Migration),
            Box::new(m20250108_000003_create_car_operator_assignment_table::Migration),
            Box::new(m20250108_000004_create_action_log_table::Migration),
        ]
    }
}
