use chrono::{NaiveDate, Utc};
use migration::{ACTIVE_CAR_ASSIGNMENT_INDEX, ACTIVE_OPERATOR_ASSIGNMENT_INDEX};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use thiserror::Error;
use uuid::Uuid;

use crate::server::model::assignment::{
    ActiveAssignmentConflict, Assignment, AssignmentFilter, CloseOutcome,
    CreateAssignmentParams,
};

use entity::car_operator_assignment::Column;

/// Failure to insert a new active assignment.
#[derive(Error, Debug)]
pub enum InsertAssignmentError {
    /// One of the active-assignment unique indexes rejected the row.
    #[error("active assignment already exists ({0:?})")]
    ActiveConflict(ActiveAssignmentConflict),

    #[error(transparent)]
    Db(#[from] DbErr),
}

pub struct AssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active assignment
    ///
    /// The partial unique indexes on active rows are the authority on uniqueness;
    /// their violations come back as `ActiveConflict` so callers can report them
    /// like any pre-checked conflict.
    ///
    /// # Returns
    /// - `Ok(Assignment)`: The created assignment (`end_date = None`)
    /// - `Err(InsertAssignmentError::ActiveConflict)`: Car or operator already has an active row
    /// - `Err(InsertAssignmentError::Db)`: Any other database error
    pub async fn insert(
        &self,
        params: CreateAssignmentParams,
    ) -> Result<Assignment, InsertAssignmentError> {
        let result = entity::car_operator_assignment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            car_id: ActiveValue::Set(params.car_id),
            operator_id: ActiveValue::Set(params.operator_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(None),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(params.created_by),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(model) => Ok(Assignment::from_entity(model)),
            Err(err) => match active_conflict(&err) {
                Some(conflict) => Err(InsertAssignmentError::ActiveConflict(conflict)),
                None => Err(InsertAssignmentError::Db(err)),
            },
        }
    }

    /// Gets an assignment by ID
    ///
    /// # Returns
    /// - `Ok(Some(Assignment))`: Assignment found
    /// - `Ok(None)`: Assignment not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Assignment>, DbErr> {
        let assignment = entity::prelude::CarOperatorAssignment::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(assignment.map(Assignment::from_entity))
    }

    /// Gets the active assignment of a car
    ///
    /// # Returns
    /// - `Ok(Some(Assignment))`: The car's active assignment
    /// - `Ok(None)`: The car has no active assignment
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_by_car(&self, car_id: &str) -> Result<Option<Assignment>, DbErr> {
        let assignment = entity::prelude::CarOperatorAssignment::find()
            .filter(Column::CarId.eq(car_id))
            .filter(Column::EndDate.is_null())
            .one(self.db)
            .await?;

        Ok(assignment.map(Assignment::from_entity))
    }

    /// Gets the active assignment of an operator
    ///
    /// # Returns
    /// - `Ok(Some(Assignment))`: The operator's active assignment
    /// - `Ok(None)`: The operator has no active assignment
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_by_operator(
        &self,
        operator_id: &str,
    ) -> Result<Option<Assignment>, DbErr> {
        let assignment = entity::prelude::CarOperatorAssignment::find()
            .filter(Column::OperatorId.eq(operator_id))
            .filter(Column::EndDate.is_null())
            .one(self.db)
            .await?;

        Ok(assignment.map(Assignment::from_entity))
    }

    /// Checks whether an operator has an active assignment
    pub async fn operator_has_active(&self, operator_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::CarOperatorAssignment::find()
            .filter(Column::OperatorId.eq(operator_id))
            .filter(Column::EndDate.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Closes an assignment if it is still active
    ///
    /// Issued as a single `UPDATE ... WHERE id = ? AND end_date IS NULL`, so of two
    /// concurrent callers only one can close the row. Notes replace the stored notes
    /// when provided and are left untouched otherwise.
    ///
    /// # Returns
    /// - `Ok(CloseOutcome::Closed)`: The row was active and is now closed
    /// - `Ok(CloseOutcome::NotActive)`: No such row, or it was already closed
    /// - `Err(DbErr)`: Database error
    pub async fn close_active(
        &self,
        assignment_id: &str,
        end_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<CloseOutcome, DbErr> {
        let mut update = entity::prelude::CarOperatorAssignment::update_many()
            .col_expr(Column::EndDate, Expr::value(end_date))
            .filter(Column::Id.eq(assignment_id))
            .filter(Column::EndDate.is_null());

        if let Some(notes) = notes {
            update = update.col_expr(Column::Notes, Expr::value(notes));
        }

        let result = update.exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(CloseOutcome::NotActive);
        }

        let closed = self.find_by_id(assignment_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Assignment {} not found", assignment_id))
        })?;

        Ok(CloseOutcome::Closed(closed))
    }

    /// Gets assignments matching the filter, newest start date first
    ///
    /// # Arguments
    /// - `filter`: Optional car, operator, active-state and date-range filters (AND)
    ///
    /// # Returns
    /// - `Ok(Vec<Assignment>)`: Matching assignments
    /// - `Err(DbErr)`: Database error
    pub async fn query_history(&self, filter: AssignmentFilter) -> Result<Vec<Assignment>, DbErr> {
        let mut query = entity::prelude::CarOperatorAssignment::find();

        if let Some(car_id) = filter.car_id {
            query = query.filter(Column::CarId.eq(car_id));
        }
        if let Some(operator_id) = filter.operator_id {
            query = query.filter(Column::OperatorId.eq(operator_id));
        }
        match filter.active_only {
            Some(true) => query = query.filter(Column::EndDate.is_null()),
            Some(false) => query = query.filter(Column::EndDate.is_not_null()),
            None => {}
        }
        if let Some(from) = filter.from {
            query = query.filter(Column::StartDate.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(
                Condition::any()
                    .add(Column::EndDate.is_null())
                    .add(Column::EndDate.lte(to)),
            );
        }

        let assignments = query
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(assignments.into_iter().map(Assignment::from_entity).collect())
    }
}

/// Maps a unique violation on one of the active-assignment indexes to its dimension.
fn active_conflict(err: &DbErr) -> Option<ActiveAssignmentConflict> {
    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(message) => classify_unique_violation(&message),
        _ => None,
    }
}

/// Postgres names the violated index, Sqlite names the indexed column.
fn classify_unique_violation(message: &str) -> Option<ActiveAssignmentConflict> {
    if message.contains(ACTIVE_CAR_ASSIGNMENT_INDEX)
        || message.contains("car_operator_assignment.car_id")
    {
        Some(ActiveAssignmentConflict::Car)
    } else if message.contains(ACTIVE_OPERATOR_ASSIGNMENT_INDEX)
        || message.contains("car_operator_assignment.operator_id")
    {
        Some(ActiveAssignmentConflict::Operator)
    } else {
        None
    }
}
