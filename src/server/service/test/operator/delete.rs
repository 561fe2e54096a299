use super::*;
use crate::server::model::assignment::UnassignFromCarParams;
use chrono::Utc;

/// Tests that an operator with an active assignment cannot be deleted.
///
/// Once the assignment is ended the same delete succeeds.
///
/// Expected: Err(HasActiveAssignment), then Ok with the operator deactivated
#[tokio::test]
async fn refuses_delete_while_assigned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, operator, _assignment) =
        factory::helpers::create_active_assignment_with_dependencies(db).await?;
    let service = OperatorService::new(db);

    let err = service.delete(&operator.id, "admin-1").await.unwrap_err();
    let err = operator_error(err);
    assert_eq!(err, OperatorError::HasActiveAssignment);
    assert_eq!(err.kind(), ErrorKind::Precondition);

    let stored = entity::prelude::CarOperator::find_by_id(operator.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_active);

    AssignmentService::new(db)
        .unassign_from_car(
            UnassignFromCarParams {
                car_id: car.id,
                end_date: Utc::now().date_naive().to_string(),
                notes: None,
            },
            "admin-1",
        )
        .await
        .unwrap();

    service.delete(&operator.id, "admin-1").await.unwrap();

    let stored = entity::prelude::CarOperator::find_by_id(operator.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_active);

    Ok(())
}

/// Tests deleting an operator without assignments.
///
/// Expected: Ok, operator kept but inactive, with a delete audit entry
#[tokio::test]
async fn soft_deletes_unassigned_operator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let operator = factory::create_operator(db).await?;

    OperatorService::new(db)
        .delete(&operator.id, "admin-1")
        .await
        .unwrap();

    let stored = entity::prelude::CarOperator::find_by_id(operator.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_active);

    let entries = operator_audit_entries(db, &operator.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action_type, "delete");
    assert_eq!(entries[0].performed_by, "admin-1");
    assert_eq!(
        entries[0].changes,
        serde_json::json!({ "isActive": { "old": true, "new": false } })
    );

    Ok(())
}

/// Tests deleting an operator that does not exist.
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

    let err = OperatorService::new(db)
        .delete("missing", "admin-1")
        .await
        .unwrap_err();

    assert_eq!(operator_error(err), OperatorError::NotFound);

    Ok(())
}
