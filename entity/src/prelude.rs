pub use super::action_log::Entity as ActionLog;
pub use super::car::Entity as Car;
pub use super::car_operator::Entity as CarOperator;
pub use super::car_operator_assignment::Entity as CarOperatorAssignment;
