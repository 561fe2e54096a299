//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active car and an active operator.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((car, operator))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_and_operator(
    db: &DatabaseConnection,
) -> Result<(entity::car::Model, entity::car_operator::Model), DbErr> {
    let car = crate::factory::car::create_car(db).await?;
    let operator = crate::factory::operator::create_operator(db).await?;

    Ok((car, operator))
}

/// Creates a car, an operator and an active assignment linking them.
///
/// The assignment starts today and has no end date.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((car, operator, assignment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_active_assignment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::car::Model,
        entity::car_operator::Model,
        entity::car_operator_assignment::Model,
    ),
    DbErr,
> {
    let (car, operator) = create_car_and_operator(db).await?;
    let assignment = crate::factory::assignment::create_assignment(db, &car.id, &operator.id).await?;

    Ok((car, operator, assignment))
}
