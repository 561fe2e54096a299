use super::*;

/// Tests inserting an assignment for a free car and operator.
///
/// Expected: Ok with an active assignment carrying the given fields
#[tokio::test]
async fn inserts_active_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;

    let repo = AssignmentRepository::new(db);
    let mut create = params(&car.id, &operator.id, date(2025, 1, 1));
    create.notes = Some("day shift".to_string());

    let assignment = repo.insert(create).await.unwrap();

    assert!(!assignment.id.is_empty());
    assert_eq!(assignment.car_id, car.id);
    assert_eq!(assignment.operator_id, operator.id);
    assert_eq!(assignment.start_date, date(2025, 1, 1));
    assert_eq!(assignment.end_date, None);
    assert_eq!(assignment.notes, Some("day shift".to_string()));
    assert_eq!(assignment.created_by, "admin-1");

    let stored = entity::prelude::CarOperatorAssignment::find_by_id(assignment.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the car index rejecting a second active assignment for the same car.
///
/// Expected: Err(ActiveConflict(Car))
#[tokio::test]
async fn rejects_second_active_assignment_for_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, _operator, _assignment) =
        factory::helpers::create_active_assignment_with_dependencies(db).await?;
    let other_operator = factory::create_operator(db).await?;

    let repo = AssignmentRepository::new(db);
    let result = repo
        .insert(params(&car.id, &other_operator.id, date(2025, 1, 1)))
        .await;

    assert!(matches!(
        result,
        Err(InsertAssignmentError::ActiveConflict(
            ActiveAssignmentConflict::Car
        ))
    ));

    Ok(())
}

/// Tests the operator index rejecting a second active assignment for the same operator.
///
/// Expected: Err(ActiveConflict(Operator))
#[tokio::test]
async fn rejects_second_active_assignment_for_operator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_car, operator, _assignment) =
        factory::helpers::create_active_assignment_with_dependencies(db).await?;
    let other_car = factory::create_car(db).await?;

    let repo = AssignmentRepository::new(db);
    let result = repo
        .insert(params(&other_car.id, &operator.id, date(2025, 1, 1)))
        .await;

    assert!(matches!(
        result,
        Err(InsertAssignmentError::ActiveConflict(
            ActiveAssignmentConflict::Operator
        ))
    ));

    Ok(())
}

/// Tests that closed assignments do not block a new active assignment.
///
/// Expected: Ok
#[tokio::test]
async fn allows_new_assignment_after_closed_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;
    factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(date(2025, 1, 1))
        .end_date(Some(date(2025, 1, 10)))
        .build()
        .await?;

    let repo = AssignmentRepository::new(db);
    let result = repo
        .insert(params(&car.id, &operator.id, date(2025, 1, 10)))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a missing table surfaces as a plain database error.
///
/// Expected: Err(Db)
#[tokio::test]
async fn returns_db_error_for_other_failures() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AssignmentRepository::new(db);
    let result = repo.insert(params("car-1", "operator-1", date(2025, 1, 1))).await;

    assert!(matches!(result, Err(InsertAssignmentError::Db(_))));

    Ok(())
}
