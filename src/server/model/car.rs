//! Read-only view of a fleet vehicle as consumed by the assignment engine.

pub use entity::car::CarStatus;

/// A fleet vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: String,
    pub license_plate: String,
    pub status: CarStatus,
}

impl Car {
    /// Converts an entity model to a car domain model at the repository boundary.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            license_plate: entity.license_plate,
            status: entity.status,
        }
    }

    /// Only active cars may receive a new assignment.
    pub fn is_assignable(&self) -> bool {
        self.status == CarStatus::Active
    }
}
