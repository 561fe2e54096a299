//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::car::CarStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db)
///     .license_plate("AB-123-CD")
///     .status(CarStatus::Retired)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    license_plate: String,
    status: CarStatus,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - id: `"car-{n}"` where n is auto-incremented
    /// - license_plate: `"PLATE-{n}"`
    /// - status: `CarStatus::Active`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("car-{}", id),
            license_plate: format!("PLATE-{}", id),
            status: CarStatus::Active,
        }
    }

    /// Sets the car ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the license plate.
    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = license_plate.into();
        self
    }

    /// Sets the car status.
    pub fn status(mut self, status: CarStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        let now = Utc::now();

        entity::car::ActiveModel {
            id: ActiveValue::Set(self.id),
            license_plate: ActiveValue::Set(self.license_plate),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active car with default values.
///
/// Shorthand for `CarFactory::new(db).build().await`.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
