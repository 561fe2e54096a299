use crate::server::{data::car::CarRepository, model::car::CarStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests finding a car by ID.
///
/// Expected: Ok(Some) with the stored status
#[tokio::test]
async fn finds_car_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::CarFactory::new(db)
        .status(CarStatus::Maintenance)
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let found = repo.find_by_id(&car.id).await?.unwrap();

    assert_eq!(found.id, car.id);
    assert_eq!(found.license_plate, car.license_plate);
    assert_eq!(found.status, CarStatus::Maintenance);
    assert!(!found.is_assignable());

    Ok(())
}

/// Tests finding a car that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    assert!(repo.find_by_id("missing").await?.is_none());

    Ok(())
}
