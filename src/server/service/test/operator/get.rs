use super::*;
use chrono::NaiveDate;

/// Tests getting an operator with assignment data.
///
/// Expected: Ok with current assignment and full history newest first
#[tokio::test]
async fn returns_operator_with_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator) = factory::helpers::create_car_and_operator(db).await?;
    let previous = factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2024, 12, 31))
        .build()
        .await?;
    let current = factory::assignment::AssignmentFactory::new(db, &car.id, &operator.id)
        .start_date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
        .build()
        .await?;

    let detail = OperatorService::new(db).get(&operator.id).await.unwrap();

    assert_eq!(detail.operator.id, operator.id);
    assert_eq!(
        detail.current_assignment.map(|a| a.id),
        Some(current.id.clone())
    );
    let history: Vec<_> = detail
        .assignment_history
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(history, vec![current.id, previous.id]);

    Ok(())
}

/// Tests getting an operator that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_operator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = OperatorService::new(db).get("missing").await.unwrap_err();

    assert_eq!(operator_error(err), OperatorError::NotFound);

    Ok(())
}
