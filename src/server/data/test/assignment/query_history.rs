use super::*;

/// Tests that history is returned newest start date first.
///
/// Expected: Ok with the later assignment first
#[tokio::test]
async fn orders_by_start_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, first_operator) = factory::helpers::create_car_and_operator(db).await?;
    let second_operator = factory::create_operator(db).await?;

    factory::assignment::AssignmentFactory::new(db, &car.id, &first_operator.id)
        .start_date(date(2025, 1, 1))
        .end_date(Some(date(2025, 1, 10)))
        .build()
        .await?;
    factory::assignment::AssignmentFactory::new(db, &car.id, &second_operator.id)
        .start_date(date(2025, 1, 10))
        .build()
        .await?;

    let repo = AssignmentRepository::new(db);
    let history = repo.query_history(AssignmentFilter::for_car(&car.id)).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].operator_id, second_operator.id);
    assert_eq!(history[1].operator_id, first_operator.id);

    Ok(())
}

/// Tests filtering by operator.
///
/// Expected: Ok with only the operator's assignments
#[tokio::test]
async fn filters_by_operator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_car, operator, assignment) =
        factory::helpers::create_active_assignment_with_dependencies(db).await?;
    factory::helpers::create_active_assignment_with_dependencies(db).await?;

    let repo = AssignmentRepository::new(db);
    let history = repo
        .query_history(AssignmentFilter::for_operator(&operator.id))
        .await?;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, assignment.id);

    Ok(())
}

/// Tests filtering by active state.
///
/// Expected: active_only selects open rows, Some(false) selects closed rows
#[tokio::test]
async fn filters_by_active_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;
    let closed = factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(date(2025, 1, 1))
        .end_date(Some(date(2025, 1, 10)))
        .build()
        .await?;
    let open = factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(date(2025, 1, 10))
        .build()
        .await?;

    let repo = AssignmentRepository::new(db);

    let active = repo
        .query_history(AssignmentFilter {
            active_only: Some(true),
            ..AssignmentFilter::for_car(&car.id)
        })
        .await?;
    let inactive = repo
        .query_history(AssignmentFilter {
            active_only: Some(false),
            ..AssignmentFilter::for_car(&car.id)
        })
        .await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, open.id);
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].id, closed.id);

    Ok(())
}

/// Tests the date range filter.
///
/// `from` bounds the start date, `to` keeps rows that ended by then or are still active.
///
/// Expected: Ok with only the rows inside the range
#[tokio::test]
async fn filters_by_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;
    let early = factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(date(2024, 12, 1))
        .end_date(Some(date(2024, 12, 20)))
        .build()
        .await?;
    let late_closed = factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(date(2025, 1, 1))
        .end_date(Some(date(2025, 3, 1)))
        .build()
        .await?;
    let open = factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(date(2025, 3, 1))
        .build()
        .await?;

    let repo = AssignmentRepository::new(db);

    let from_january = repo
        .query_history(AssignmentFilter {
            from: Some(date(2025, 1, 1)),
            ..Default::default()
        })
        .await?;
    let ids: Vec<_> = from_january.iter().map(|a| a.id.clone()).collect();
    assert_eq!(ids, vec![open.id.clone(), late_closed.id.clone()]);

    let to_february = repo
        .query_history(AssignmentFilter {
            to: Some(date(2025, 2, 1)),
            ..Default::default()
        })
        .await?;
    let ids: Vec<_> = to_february.iter().map(|a| a.id.clone()).collect();
    assert_eq!(ids, vec![open.id, early.id]);

    Ok(())
}

/// Tests querying history for a car without assignments.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AssignmentRepository::new(db);
    let history = repo.query_history(AssignmentFilter::for_car("missing")).await?;

    assert!(history.is_empty());

    Ok(())
}
