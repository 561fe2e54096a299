use sea_orm::DatabaseConnection;
use serde_json::{json, Map, Value};

use crate::server::{
    data::operator::{is_duplicate_employee_number, OperatorRepository},
    error::{operator::OperatorError, AppError},
    model::{
        action_log::{ActionType, AuditEntry, EntityType},
        assignment::{AssignmentFilter, AssignmentSubject},
        operator::{
            CreateOperatorParams, Operator, OperatorChanges, OperatorDetail, OperatorFilter,
            OperatorWithCurrentCar, UpdateOperatorParams,
        },
    },
    service::{action_log::ActionLogService, assignment::AssignmentService},
    util::date::is_blank,
};

pub struct OperatorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OperatorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active operator
    ///
    /// # Arguments
    /// - `params`: Operator fields; names and employee number are trimmed
    /// - `actor_id`: ID of the administrator creating the operator
    ///
    /// # Returns
    /// - `Ok(Operator)`: The created operator
    /// - `Err(AppError::OperatorErr)`: Missing field, invalid email or duplicate employee number
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateOperatorParams,
        actor_id: &str,
    ) -> Result<Operator, AppError> {
        let employee_number = required(params.employee_number, "employee number")?;
        let first_name = required(params.first_name, "first name")?;
        let last_name = required(params.last_name, "last name")?;
        let email = optional_email(params.email)?;

        let repo = OperatorRepository::new(self.db);

        if repo
            .find_by_employee_number(&employee_number)
            .await?
            .is_some()
        {
            return Err(OperatorError::DuplicateEmployeeNumber.into());
        }

        let operator = repo
            .create(
                CreateOperatorParams {
                    employee_number,
                    first_name,
                    last_name,
                    email,
                    phone: optional(params.phone),
                    department: optional(params.department),
                },
                actor_id,
            )
            .await
            .map_err(|e| {
                if is_duplicate_employee_number(&e) {
                    AppError::from(OperatorError::DuplicateEmployeeNumber)
                } else {
                    AppError::from(e)
                }
            })?;

        tracing::info!(
            "Created operator {} ({}) by {}",
            operator.id,
            operator.employee_number,
            actor_id
        );

        ActionLogService::new(self.db)
            .record(AuditEntry {
                entity_type: EntityType::Operator,
                entity_id: operator.id.clone(),
                action_type: ActionType::Create,
                performed_by: actor_id.to_string(),
                changes: json!({
                    "employeeNumber": operator.employee_number,
                    "firstName": operator.first_name,
                    "lastName": operator.last_name,
                }),
            })
            .await;

        Ok(operator)
    }

    /// Gets an operator with its current assignment and assignment history
    ///
    /// # Returns
    /// - `Ok(OperatorDetail)`: The operator with assignment data
    /// - `Err(AppError::OperatorErr(NotFound))`: Operator not found
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get(&self, id: &str) -> Result<OperatorDetail, AppError> {
        let operator = OperatorRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(OperatorError::NotFound)?;

        let assignments = AssignmentService::new(self.db);
        let current_assignment = assignments
            .get_active_assignment(AssignmentSubject::Operator(operator.id.clone()))
            .await?;
        let assignment_history = assignments
            .get_history(AssignmentFilter::for_operator(operator.id.clone()))
            .await?;

        Ok(OperatorDetail {
            operator,
            current_assignment,
            assignment_history,
        })
    }

    /// Lists operators with the car each one currently drives
    ///
    /// Blank `department` or `search` values are ignored.
    ///
    /// # Returns
    /// - `Ok(Vec<OperatorWithCurrentCar>)`: Matching operators, newest first
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn list(
        &self,
        filter: OperatorFilter,
    ) -> Result<Vec<OperatorWithCurrentCar>, AppError> {
        let filter = OperatorFilter {
            is_active: filter.is_active,
            department: optional(filter.department),
            search: optional(filter.search),
        };

        let operators = OperatorRepository::new(self.db).find_all(&filter).await?;

        Ok(operators)
    }

    /// Updates an operator
    ///
    /// Only provided fields that differ from the stored values are written. An empty
    /// optional contact field clears it. The employee number cannot be changed.
    ///
    /// # Returns
    /// - `Ok(Operator)`: The operator after the update
    /// - `Err(AppError::OperatorErr)`: Not found, empty name or invalid email
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn update(
        &self,
        id: &str,
        params: UpdateOperatorParams,
        actor_id: &str,
    ) -> Result<Operator, AppError> {
        let repo = OperatorRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or(OperatorError::NotFound)?;

        let mut changes = OperatorChanges::default();
        let mut audit = Map::new();

        if let Some(first_name) = params.first_name {
            let first_name = non_empty(first_name, "first name")?;
            if first_name != existing.first_name {
                audit.insert("firstName".into(), diff(&existing.first_name, &first_name));
                changes.first_name = Some(first_name);
            }
        }
        if let Some(last_name) = params.last_name {
            let last_name = non_empty(last_name, "last name")?;
            if last_name != existing.last_name {
                audit.insert("lastName".into(), diff(&existing.last_name, &last_name));
                changes.last_name = Some(last_name);
            }
        }
        if let Some(email) = params.email {
            let email = optional_email(Some(email))?;
            if email != existing.email {
                audit.insert("email".into(), diff(&existing.email, &email));
                changes.email = Some(email);
            }
        }
        if let Some(phone) = params.phone {
            let phone = optional(Some(phone));
            if phone != existing.phone {
                audit.insert("phone".into(), diff(&existing.phone, &phone));
                changes.phone = Some(phone);
            }
        }
        if let Some(department) = params.department {
            let department = optional(Some(department));
            if department != existing.department {
                audit.insert("department".into(), diff(&existing.department, &department));
                changes.department = Some(department);
            }
        }
        if let Some(is_active) = params.is_active {
            if is_active != existing.is_active {
                audit.insert("isActive".into(), diff(&existing.is_active, &is_active));
                changes.is_active = Some(is_active);
            }
        }

        if changes.is_empty() {
            return Ok(existing);
        }

        let operator = repo.update(id, changes).await?;

        tracing::info!("Updated operator {} by {}", operator.id, actor_id);

        ActionLogService::new(self.db)
            .record(AuditEntry {
                entity_type: EntityType::Operator,
                entity_id: operator.id.clone(),
                action_type: ActionType::Update,
                performed_by: actor_id.to_string(),
                changes: Value::Object(audit),
            })
            .await;

        Ok(operator)
    }

    /// Soft deletes an operator
    ///
    /// Refused while the operator has an active assignment; the assignment must be
    /// ended first.
    ///
    /// # Returns
    /// - `Ok(())`: Operator deactivated
    /// - `Err(AppError::OperatorErr(NotFound))`: Operator not found
    /// - `Err(AppError::OperatorErr(HasActiveAssignment))`: Operator still assigned
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn delete(&self, id: &str, actor_id: &str) -> Result<(), AppError> {
        let repo = OperatorRepository::new(self.db);

        let operator = repo.find_by_id(id).await?.ok_or(OperatorError::NotFound)?;

        if AssignmentService::new(self.db)
            .operator_has_active_assignment(&operator.id)
            .await?
        {
            return Err(OperatorError::HasActiveAssignment.into());
        }

        if !repo.soft_delete(&operator.id).await? {
            return Err(OperatorError::NotFound.into());
        }

        tracing::info!("Deactivated operator {} by {}", operator.id, actor_id);

        ActionLogService::new(self.db)
            .record(AuditEntry {
                entity_type: EntityType::Operator,
                entity_id: operator.id.clone(),
                action_type: ActionType::Delete,
                performed_by: actor_id.to_string(),
                changes: json!({ "isActive": diff(&operator.is_active, &false) }),
            })
            .await;

        Ok(())
    }
}

fn required(value: String, field: &'static str) -> Result<String, OperatorError> {
    if is_blank(&value) {
        return Err(OperatorError::MissingField(field));
    }
    Ok(value.trim().to_string())
}

fn non_empty(value: String, field: &'static str) -> Result<String, OperatorError> {
    if is_blank(&value) {
        return Err(OperatorError::EmptyField(field));
    }
    Ok(value.trim().to_string())
}

/// Blank optional fields are stored as `NULL`.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_email(value: Option<String>) -> Result<Option<String>, OperatorError> {
    match optional(value) {
        Some(email) if !validator::validate_email(email.as_str()) => {
            Err(OperatorError::InvalidEmail)
        }
        email => Ok(email),
    }
}

fn diff<T: serde::Serialize>(old: &T, new: &T) -> Value {
    json!({ "old": old, "new": new })
}
