use super::*;

/// Tests assigning a free operator to a free active car.
///
/// Verifies the round trip: the active assignment of both the car and the operator
/// is the created one.
///
/// Expected: Ok with active assignment
#[tokio::test]
async fn assigns_operator_to_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;

    let service = service(db);
    let mut params = assign(&car.id, &operator.id, "2025-01-05");
    params.notes = Some("weekday pool".to_string());
    let assignment = service.assign_to_car(params, "admin-1").await.unwrap();

    assert_eq!(assignment.car_id, car.id);
    assert_eq!(assignment.operator_id, operator.id);
    assert_eq!(assignment.start_date, date(2025, 1, 5));
    assert_eq!(assignment.end_date, None);
    assert_eq!(assignment.notes, Some("weekday pool".to_string()));
    assert_eq!(assignment.created_by, "admin-1");

    let by_car = service
        .get_active_assignment(AssignmentSubject::Car(car.id.clone()))
        .await
        .unwrap();
    let by_operator = service
        .get_active_assignment(AssignmentSubject::Operator(operator.id.clone()))
        .await
        .unwrap();
    assert_eq!(by_car, Some(assignment.clone()));
    assert_eq!(by_operator, Some(assignment));

    Ok(())
}

/// Tests the backdating boundary.
///
/// Exactly seven days before today is accepted, eight days is rejected.
///
/// Expected: Ok for 7 days, Err(StartDateTooOld) for 8 days
#[tokio::test]
async fn enforces_seven_day_backdating_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;
    let service = AssignmentService::new(db).with_today(date(2025, 1, 15));

    let err = service
        .assign_to_car(assign(&car.id, &operator.id, "2025-01-07"), "admin-1")
        .await
        .unwrap_err();
    let err = assignment_error(err);
    assert_eq!(err, AssignmentError::StartDateTooOld { max_days: 7 });
    assert_eq!(err.kind(), ErrorKind::Precondition);

    let result = service
        .assign_to_car(assign(&car.id, &operator.id, "2025-01-08"), "admin-1")
        .await;
    assert!(result.is_ok());

    Ok(())
}

/// Tests that future start dates have no upper bound.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_future_start_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;

    let result = service(db)
        .assign_to_car(assign(&car.id, &operator.id, "2030-06-01"), "admin-1")
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests required field and date format validation.
///
/// Expected: Err(MissingField) or Err(InvalidDate), checked before any lookup
#[tokio::test]
async fn validates_input_before_lookups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = service(db);

    let cases = [
        (assign("", "", ""), AssignmentError::MissingField("car ID")),
        (
            assign("car", " ", "2025-01-05"),
            AssignmentError::MissingField("operator ID"),
        ),
        (
            assign("car", "operator", ""),
            AssignmentError::MissingField("start date"),
        ),
        (
            assign("car", "operator", "05/01/2025"),
            AssignmentError::InvalidDate("start date"),
        ),
    ];

    for (params, expected) in cases {
        let err = service.assign_to_car(params, "admin-1").await.unwrap_err();
        let err = assignment_error(err);
        assert_eq!(err, expected);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    Ok(())
}

/// Tests assigning to a car or operator that does not exist.
///
/// Expected: Err(CarNotFound) then Err(OperatorNotFound)
#[tokio::test]
async fn fails_for_missing_car_or_operator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;
    let service = service(db);

    let err = service
        .assign_to_car(assign("missing", &operator.id, "2025-01-05"), "admin-1")
        .await
        .unwrap_err();
    assert_eq!(assignment_error(err), AssignmentError::CarNotFound);

    let err = service
        .assign_to_car(assign(&car.id, "missing", "2025-01-05"), "admin-1")
        .await
        .unwrap_err();
    let err = assignment_error(err);
    assert_eq!(err, AssignmentError::OperatorNotFound);
    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}

/// Tests that only active cars and active operators can be assigned.
///
/// The car is checked before the operator.
///
/// Expected: Err(CarNotActive) while both are inactive, then Err(OperatorNotActive)
#[tokio::test]
async fn requires_active_car_and_operator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let retired_car = factory::car::CarFactory::new(db)
        .status(CarStatus::Retired)
        .build()
        .await?;
    let active_car = factory::create_car(db).await?;
    let inactive_operator = factory::operator::OperatorFactory::new(db)
        .active(false)
        .build()
        .await?;
    let service = service(db);

    let err = service
        .assign_to_car(
            assign(&retired_car.id, &inactive_operator.id, "2025-01-05"),
            "admin-1",
        )
        .await
        .unwrap_err();
    assert_eq!(assignment_error(err), AssignmentError::CarNotActive);

    let err = service
        .assign_to_car(
            assign(&active_car.id, &inactive_operator.id, "2025-01-05"),
            "admin-1",
        )
        .await
        .unwrap_err();
    let err = assignment_error(err);
    assert_eq!(err, AssignmentError::OperatorNotActive);
    assert_eq!(err.kind(), ErrorKind::Precondition);

    Ok(())
}

/// Tests the active assignment pre-checks.
///
/// The operator is checked before the car, and both are conflicts.
///
/// Expected: Err(OperatorAlreadyAssigned) then Err(CarAlreadyAssigned)
#[tokio::test]
async fn rejects_already_assigned_operator_or_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (busy_car, busy_operator, _assignment) =
        factory::helpers::create_active_assignment_with_dependencies(db).await?;
    let (free_car, free_operator) = factory::helpers::create_car_and_operator(db).await?;
    let service = service(db);

    let err = service
        .assign_to_car(assign(&busy_car.id, &busy_operator.id, "2025-01-05"), "admin-1")
        .await
        .unwrap_err();
    assert_eq!(assignment_error(err), AssignmentError::OperatorAlreadyAssigned);

    let err = service
        .assign_to_car(assign(&free_car.id, &busy_operator.id, "2025-01-05"), "admin-1")
        .await
        .unwrap_err();
    assert_eq!(assignment_error(err), AssignmentError::OperatorAlreadyAssigned);

    let err = service
        .assign_to_car(assign(&busy_car.id, &free_operator.id, "2025-01-05"), "admin-1")
        .await
        .unwrap_err();
    let err = assignment_error(err);
    assert_eq!(err, AssignmentError::CarAlreadyAssigned);
    assert_eq!(err.kind(), ErrorKind::Conflict);

    Ok(())
}

/// Tests two concurrent assignments of different operators to the same car.
///
/// Whichever path catches the loser (pre-check or unique index), it sees the same
/// conflict and the car ends up with exactly one active assignment.
///
/// Expected: exactly one Ok and one Err(CarAlreadyAssigned)
#[tokio::test]
async fn concurrent_assignments_to_same_car_yield_one_winner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, first_operator) = factory::helpers::create_car_and_operator(db).await?;
    let second_operator = factory::create_operator(db).await?;
    let service = service(db);

    let (first, second) = tokio::join!(
        service.assign_to_car(assign(&car.id, &first_operator.id, "2025-01-05"), "admin-1"),
        service.assign_to_car(assign(&car.id, &second_operator.id, "2025-01-05"), "admin-2"),
    );

    let (winner, loser) = match (first, second) {
        (Ok(winner), Err(loser)) | (Err(loser), Ok(winner)) => (winner, loser),
        (first, second) => panic!(
            "expected exactly one success, got {:?} and {:?}",
            first.is_ok(),
            second.is_ok()
        ),
    };

    assert_eq!(winner.car_id, car.id);
    assert_eq!(assignment_error(loser), AssignmentError::CarAlreadyAssigned);
    assert_eq!(active_rows_for_car(db, &car.id).await?, 1);

    Ok(())
}

/// Tests the reassignment scenario without overlap.
///
/// Assign A on 2025-01-01, unassign on 2025-01-10, assign B on 2025-01-10.
///
/// Expected: Ok, history for the car has both rows newest first
#[tokio::test]
async fn reassigns_car_on_unassign_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator_a) = factory::helpers::create_car_and_operator(db).await?;
    let operator_b = factory::create_operator(db).await?;
    let service = service(db);

    service
        .assign_to_car(assign(&car.id, &operator_a.id, "2025-01-01"), "admin-1")
        .await
        .unwrap();
    service
        .unassign_from_car(unassign(&car.id, "2025-01-10"), "admin-1")
        .await
        .unwrap();
    let second = service
        .assign_to_car(assign(&car.id, &operator_b.id, "2025-01-10"), "admin-1")
        .await
        .unwrap();

    let history = service
        .get_history(AssignmentFilter::for_car(&car.id))
        .await
        .unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[0].operator_id, operator_b.id);
    assert_eq!(history[0].end_date, None);
    assert_eq!(history[1].operator_id, operator_a.id);
    assert_eq!(history[1].start_date, date(2025, 1, 1));
    assert_eq!(history[1].end_date, Some(date(2025, 1, 10)));

    Ok(())
}
