use chrono::{Duration, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    data::{
        assignment::{AssignmentRepository, InsertAssignmentError},
        car::CarRepository,
        operator::OperatorRepository,
    },
    error::{assignment::AssignmentError, AppError},
    model::{
        action_log::{ActionType, AuditEntry, EntityType},
        assignment::{
            AssignToCarParams, Assignment, AssignmentFilter, AssignmentSubject, CloseOutcome,
            CreateAssignmentParams, UnassignFromCarParams,
        },
    },
    service::action_log::ActionLogService,
    util::date::{is_blank, parse_iso_date},
};

/// How far in the past a new assignment may start.
pub const MAX_BACKDATE_DAYS: i64 = 7;

/// Operator-car assignment engine.
///
/// Validates and performs assignment lifecycle transitions. At most one active assignment
/// per car and per operator is guaranteed by the partial unique indexes on the assignment
/// table; the pre-checks here only produce the same conflict earlier. Every mutating
/// operation takes the acting user's ID explicitly.
pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
    today: Option<NaiveDate>,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db, today: None }
    }

    /// Pins the date used for the backdating rule.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Assigns an operator to a car
    ///
    /// Checks run in a fixed order and the first failing one is returned:
    /// required fields, start date format, backdating limit, car exists and is active,
    /// operator exists and is active, operator free, car free.
    ///
    /// # Arguments
    /// - `params`: Raw assignment input
    /// - `actor_id`: ID of the administrator performing the assignment
    ///
    /// # Returns
    /// - `Ok(Assignment)`: The created active assignment
    /// - `Err(AppError::AssignmentErr)`: Validation, not found, precondition or conflict failure
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn assign_to_car(
        &self,
        params: AssignToCarParams,
        actor_id: &str,
    ) -> Result<Assignment, AppError> {
        if is_blank(&params.car_id) {
            return Err(AssignmentError::MissingField("car ID").into());
        }
        if is_blank(&params.operator_id) {
            return Err(AssignmentError::MissingField("operator ID").into());
        }
        if is_blank(&params.start_date) {
            return Err(AssignmentError::MissingField("start date").into());
        }

        let start_date = parse_iso_date(&params.start_date)
            .ok_or(AssignmentError::InvalidDate("start date"))?;

        let earliest_start = self.today() - Duration::days(MAX_BACKDATE_DAYS);
        if start_date < earliest_start {
            return Err(AssignmentError::StartDateTooOld {
                max_days: MAX_BACKDATE_DAYS,
            }
            .into());
        }

        let car = CarRepository::new(self.db)
            .find_by_id(&params.car_id)
            .await?
            .ok_or(AssignmentError::CarNotFound)?;
        if !car.is_assignable() {
            return Err(AssignmentError::CarNotActive.into());
        }

        let operator = OperatorRepository::new(self.db)
            .find_by_id(&params.operator_id)
            .await?
            .ok_or(AssignmentError::OperatorNotFound)?;
        if !operator.is_active {
            return Err(AssignmentError::OperatorNotActive.into());
        }

        let repo = AssignmentRepository::new(self.db);

        if repo.find_active_by_operator(&operator.id).await?.is_some() {
            return Err(AssignmentError::OperatorAlreadyAssigned.into());
        }
        if repo.find_active_by_car(&car.id).await?.is_some() {
            return Err(AssignmentError::CarAlreadyAssigned.into());
        }

        let assignment = match repo
            .insert(CreateAssignmentParams {
                car_id: car.id,
                operator_id: operator.id,
                start_date,
                notes: params.notes,
                created_by: actor_id.to_string(),
            })
            .await
        {
            Ok(assignment) => assignment,
            Err(InsertAssignmentError::ActiveConflict(conflict)) => {
                tracing::debug!(
                    "Active assignment index rejected insert for car {} and operator {}: {:?}",
                    params.car_id,
                    params.operator_id,
                    conflict
                );
                return Err(AssignmentError::from(conflict).into());
            }
            Err(InsertAssignmentError::Db(e)) => return Err(e.into()),
        };

        tracing::info!(
            "Assigned operator {} to car {} from {} by {}",
            assignment.operator_id,
            assignment.car_id,
            assignment.start_date,
            actor_id
        );

        ActionLogService::new(self.db)
            .record_all(assign_audit_entries(&assignment, actor_id))
            .await;

        Ok(assignment)
    }

    /// Ends the active assignment of a car
    ///
    /// The close is a conditional update, so when two unassign calls race for the same
    /// assignment the second one reports `NoActiveAssignment`.
    ///
    /// # Arguments
    /// - `params`: Raw unassignment input
    /// - `actor_id`: ID of the administrator performing the unassignment
    ///
    /// # Returns
    /// - `Ok(Assignment)`: The closed assignment
    /// - `Err(AppError::AssignmentErr)`: Validation failure, no active assignment, or end before start
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn unassign_from_car(
        &self,
        params: UnassignFromCarParams,
        actor_id: &str,
    ) -> Result<Assignment, AppError> {
        if is_blank(&params.car_id) {
            return Err(AssignmentError::MissingField("car ID").into());
        }
        if is_blank(&params.end_date) {
            return Err(AssignmentError::MissingField("end date").into());
        }

        let end_date =
            parse_iso_date(&params.end_date).ok_or(AssignmentError::InvalidDate("end date"))?;

        let repo = AssignmentRepository::new(self.db);

        let active = repo
            .find_active_by_car(&params.car_id)
            .await?
            .ok_or(AssignmentError::NoActiveAssignment)?;

        if end_date < active.start_date {
            return Err(AssignmentError::EndDateBeforeStartDate.into());
        }

        let closed = match repo.close_active(&active.id, end_date, params.notes).await? {
            CloseOutcome::Closed(assignment) => assignment,
            CloseOutcome::NotActive => return Err(AssignmentError::NoActiveAssignment.into()),
        };

        tracing::info!(
            "Unassigned operator {} from car {} on {} by {}",
            closed.operator_id,
            closed.car_id,
            end_date,
            actor_id
        );

        ActionLogService::new(self.db)
            .record_all(unassign_audit_entries(&closed, end_date, actor_id))
            .await;

        Ok(closed)
    }

    /// Gets the active assignment of a car or an operator
    ///
    /// # Returns
    /// - `Ok(Some(Assignment))`: The active assignment
    /// - `Ok(None)`: No active assignment
    /// - `Err(AppError)`: Database error
    pub async fn get_active_assignment(
        &self,
        subject: AssignmentSubject,
    ) -> Result<Option<Assignment>, AppError> {
        let repo = AssignmentRepository::new(self.db);

        let assignment = match subject {
            AssignmentSubject::Car(car_id) => repo.find_active_by_car(&car_id).await?,
            AssignmentSubject::Operator(operator_id) => {
                repo.find_active_by_operator(&operator_id).await?
            }
        };

        Ok(assignment)
    }

    /// Gets assignment history matching the filter, newest start date first
    pub async fn get_history(&self, filter: AssignmentFilter) -> Result<Vec<Assignment>, AppError> {
        let assignments = AssignmentRepository::new(self.db)
            .query_history(filter)
            .await?;

        Ok(assignments)
    }

    /// Reports whether an operator currently has an active assignment.
    ///
    /// Consumed by operator deletion, which is refused while this returns `true`.
    pub async fn operator_has_active_assignment(
        &self,
        operator_id: &str,
    ) -> Result<bool, AppError> {
        let has_active = AssignmentRepository::new(self.db)
            .operator_has_active(operator_id)
            .await?;

        Ok(has_active)
    }
}

fn assign_audit_entries(assignment: &Assignment, actor_id: &str) -> [AuditEntry; 2] {
    let start_date = assignment.start_date.to_string();

    [
        AuditEntry {
            entity_type: EntityType::Car,
            entity_id: assignment.car_id.clone(),
            action_type: ActionType::Assign,
            performed_by: actor_id.to_string(),
            changes: json!({
                "action": "assign_operator",
                "operatorId": assignment.operator_id,
                "startDate": start_date,
            }),
        },
        AuditEntry {
            entity_type: EntityType::Operator,
            entity_id: assignment.operator_id.clone(),
            action_type: ActionType::Assign,
            performed_by: actor_id.to_string(),
            changes: json!({
                "action": "assign_to_car",
                "carId": assignment.car_id,
                "startDate": start_date,
            }),
        },
    ]
}

fn unassign_audit_entries(
    assignment: &Assignment,
    end_date: NaiveDate,
    actor_id: &str,
) -> [AuditEntry; 2] {
    let end_date = end_date.to_string();

    [
        AuditEntry {
            entity_type: EntityType::Car,
            entity_id: assignment.car_id.clone(),
            action_type: ActionType::Unassign,
            performed_by: actor_id.to_string(),
            changes: json!({
                "action": "unassign_operator",
                "operatorId": assignment.operator_id,
                "endDate": end_date,
            }),
        },
        AuditEntry {
            entity_type: EntityType::Operator,
            entity_id: assignment.operator_id.clone(),
            action_type: ActionType::Unassign,
            performed_by: actor_id.to_string(),
            changes: json!({
                "action": "unassign_from_car",
                "carId": assignment.car_id,
                "endDate": end_date,
            }),
        },
    ]
}
