//! Assignment factory for creating test car-operator assignments.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test assignments with customizable fields.
///
/// Inserts rows directly, so the active-assignment indexes still apply: creating
/// two open assignments for the same car fails just like it does in production.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::assignment::AssignmentFactory;
///
/// let closed = AssignmentFactory::new(&db, &car.id, &operator.id)
///     .start_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2025, 1, 10))
///     .build()
///     .await?;
/// ```
pub struct AssignmentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    car_id: String,
    operator_id: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    notes: Option<String>,
    created_by: String,
}

impl<'a> AssignmentFactory<'a> {
    /// Creates a new AssignmentFactory with default values.
    ///
    /// Defaults:
    /// - id: `"assignment-{n}"` where n is auto-incremented
    /// - start_date: today (UTC)
    /// - end_date: `None` (active)
    /// - notes: `None`
    /// - created_by: `"admin-test"`
    pub fn new(
        db: &'a DatabaseConnection,
        car_id: impl Into<String>,
        operator_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("assignment-{}", id),
            car_id: car_id.into(),
            operator_id: operator_id.into(),
            start_date: Utc::now().date_naive(),
            end_date: None,
            notes: None,
            created_by: "admin-test".to_string(),
        }
    }

    /// Sets the start date.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the end date; `None` leaves the assignment active.
    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the free-text notes.
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Builds and inserts the assignment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car_operator_assignment::Model)` - Created assignment entity
    /// - `Err(DbErr)` - Database error during insert (including index violations)
    pub async fn build(self) -> Result<entity::car_operator_assignment::Model, DbErr> {
        entity::car_operator_assignment::ActiveModel {
            id: ActiveValue::Set(self.id),
            car_id: ActiveValue::Set(self.car_id),
            operator_id: ActiveValue::Set(self.operator_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(self.created_by),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active assignment starting today.
///
/// Shorthand for `AssignmentFactory::new(db, car_id, operator_id).build().await`.
pub async fn create_assignment(
    db: &DatabaseConnection,
    car_id: &str,
    operator_id: &str,
) -> Result<entity::car_operator_assignment::Model, DbErr> {
    AssignmentFactory::new(db, car_id, operator_id).build().await
}
