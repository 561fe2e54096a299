use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::car::Car;

/// Read-only car lookup consumed by the assignment engine.
pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a car by ID
    ///
    /// # Returns
    /// - `Ok(Some(Car))`: Car found
    /// - `Ok(None)`: Car not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Car>, DbErr> {
        let car = entity::prelude::Car::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(car.map(Car::from_entity))
    }
}
