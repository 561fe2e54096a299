//! Operator factory for creating test car operator entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test operators with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::operator::OperatorFactory;
///
/// let operator = OperatorFactory::new(&db)
///     .employee_number("EMP-0042")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct OperatorFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    employee_number: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
    department: Option<String>,
    is_active: bool,
}

impl<'a> OperatorFactory<'a> {
    /// Creates a new OperatorFactory with default values.
    ///
    /// Defaults:
    /// - id: `"operator-{n}"` where n is auto-incremented
    /// - employee_number: `"EMP-{n}"`
    /// - first_name / last_name: `"Operator"` / `"{n}"`
    /// - email: `None`
    /// - department: `Some("Logistics")`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("operator-{}", id),
            employee_number: format!("EMP-{}", id),
            first_name: "Operator".to_string(),
            last_name: id.to_string(),
            email: None,
            department: Some("Logistics".to_string()),
            is_active: true,
        }
    }

    /// Sets the employee number.
    pub fn employee_number(mut self, employee_number: impl Into<String>) -> Self {
        self.employee_number = employee_number.into();
        self
    }

    /// Sets the operator's first and last name.
    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Sets the department.
    pub fn department(mut self, department: Option<String>) -> Self {
        self.department = department;
        self
    }

    /// Sets whether the operator is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the operator entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car_operator::Model)` - Created operator entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car_operator::Model, DbErr> {
        let now = Utc::now();

        entity::car_operator::ActiveModel {
            id: ActiveValue::Set(self.id),
            employee_number: ActiveValue::Set(self.employee_number),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            department: ActiveValue::Set(self.department),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active operator with default values.
///
/// Shorthand for `OperatorFactory::new(db).build().await`.
pub async fn create_operator(
    db: &DatabaseConnection,
) -> Result<entity::car_operator::Model, DbErr> {
    OperatorFactory::new(db).build().await
}
