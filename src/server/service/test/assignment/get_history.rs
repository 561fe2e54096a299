use super::*;

/// Tests combining history filters with AND semantics.
///
/// Expected: Ok with only the closed assignment of the operator on the car
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;
    let other_car = factory::create_car(db).await?;

    let closed = factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(date(2024, 11, 1))
        .end_date(Some(date(2024, 11, 30)))
        .build()
        .await?;
    factory::assignment::AssignmentFactory::new(db, &other_car.id, &operator.id)
        .start_date(date(2024, 12, 1))
        .end_date(Some(date(2024, 12, 15)))
        .build()
        .await?;
    factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(date(2025, 1, 2))
        .build()
        .await?;

    let history = service(db)
        .get_history(AssignmentFilter {
            car_id: Some(car.id.clone()),
            operator_id: Some(operator.id.clone()),
            active_only: Some(false),
            from: Some(date(2024, 10, 1)),
            to: Some(date(2024, 12, 31)),
        })
        .await
        .unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, closed.id);

    Ok(())
}

/// Tests an unfiltered history query across cars.
///
/// Expected: Ok with every assignment, newest start date first
#[tokio::test]
async fn returns_all_assignments_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_car, first_operator) = factory::helpers::create_car_and_operator(db).await?;
    let (second_car, second_operator) = factory::helpers::create_car_and_operator(db).await?;

    factory::assignment::AssignmentFactory::new(db, &first_car.id, &first_operator.id)
        .start_date(date(2025, 1, 1))
        .build()
        .await?;
    factory::assignment::AssignmentFactory::new(db, &second_car.id, &second_operator.id)
        .start_date(date(2025, 1, 3))
        .build()
        .await?;

    let history = service(db)
        .get_history(AssignmentFilter::default())
        .await
        .unwrap();

    let starts: Vec<_> = history.iter().map(|a| a.start_date).collect();
    assert_eq!(starts, vec![date(2025, 1, 3), date(2025, 1, 1)]);

    Ok(())
}
