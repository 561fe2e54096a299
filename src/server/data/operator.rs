use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use crate::server::model::operator::{
    CreateOperatorParams, CurrentCar, Operator, OperatorChanges, OperatorFilter,
    OperatorWithCurrentCar,
};

use entity::car_operator::Column;

pub struct OperatorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OperatorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active operator
    ///
    /// # Arguments
    /// - `params`: Validated operator fields
    /// - `created_by`: ID of the administrator creating the operator
    ///
    /// # Returns
    /// - `Ok(Operator)`: The created operator
    /// - `Err(DbErr)`: Database error, including employee number unique violations
    pub async fn create(
        &self,
        params: CreateOperatorParams,
        created_by: &str,
    ) -> Result<Operator, DbErr> {
        let now = Utc::now();

        let operator = entity::car_operator::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            employee_number: ActiveValue::Set(params.employee_number),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            department: ActiveValue::Set(params.department),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(Some(created_by.to_string())),
        }
        .insert(self.db)
        .await?;

        Ok(Operator::from_entity(operator))
    }

    /// Gets an operator by ID
    ///
    /// # Returns
    /// - `Ok(Some(Operator))`: Operator found
    /// - `Ok(None)`: Operator not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Operator>, DbErr> {
        let operator = entity::prelude::CarOperator::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(operator.map(Operator::from_entity))
    }

    /// Gets an operator by employee number
    pub async fn find_by_employee_number(
        &self,
        employee_number: &str,
    ) -> Result<Option<Operator>, DbErr> {
        let operator = entity::prelude::CarOperator::find()
            .filter(Column::EmployeeNumber.eq(employee_number))
            .one(self.db)
            .await?;

        Ok(operator.map(Operator::from_entity))
    }

    /// Lists operators matching the filter, newest first, each with its current car
    ///
    /// The current car comes from the operator's active assignment (`end_date IS NULL`)
    /// joined with the car it points at. Operators without an active assignment get
    /// `current_car = None`.
    ///
    /// # Returns
    /// - `Ok(Vec<OperatorWithCurrentCar>)`: Matching operators, possibly empty
    /// - `Err(DbErr)`: Database error
    pub async fn find_all(
        &self,
        filter: &OperatorFilter,
    ) -> Result<Vec<OperatorWithCurrentCar>, DbErr> {
        let mut query = entity::prelude::CarOperator::find();

        if let Some(is_active) = filter.is_active {
            query = query.filter(Column::IsActive.eq(is_active));
        }
        if let Some(department) = &filter.department {
            query = query.filter(Column::Department.eq(department.as_str()));
        }
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(Column::FirstName.contains(search.as_str()))
                    .add(Column::LastName.contains(search.as_str()))
                    .add(Column::EmployeeNumber.contains(search.as_str()))
                    .add(Column::Email.contains(search.as_str())),
            );
        }

        let operators = query
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::EmployeeNumber)
            .all(self.db)
            .await?;

        if operators.is_empty() {
            return Ok(Vec::new());
        }

        let operator_ids: Vec<String> = operators.iter().map(|o| o.id.clone()).collect();

        let active = entity::prelude::CarOperatorAssignment::find()
            .filter(entity::car_operator_assignment::Column::OperatorId.is_in(operator_ids))
            .filter(entity::car_operator_assignment::Column::EndDate.is_null())
            .find_also_related(entity::prelude::Car)
            .all(self.db)
            .await?;

        let mut current_cars: HashMap<String, CurrentCar> = active
            .into_iter()
            .filter_map(|(assignment, car)| {
                car.map(|car| {
                    (
                        assignment.operator_id,
                        CurrentCar {
                            car_id: car.id,
                            license_plate: car.license_plate,
                            since: assignment.start_date,
                        },
                    )
                })
            })
            .collect();

        Ok(operators
            .into_iter()
            .map(|operator| {
                let current_car = current_cars.remove(&operator.id);
                OperatorWithCurrentCar {
                    operator: Operator::from_entity(operator),
                    current_car,
                }
            })
            .collect())
    }

    /// Applies column changes to an operator and bumps `updated_at`
    ///
    /// # Returns
    /// - `Ok(Operator)`: The updated operator
    /// - `Err(DbErr::RecordNotFound)`: Operator not found
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, id: &str, changes: OperatorChanges) -> Result<Operator, DbErr> {
        let operator = entity::prelude::CarOperator::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Operator {} not found", id)))?;

        let mut active_model: entity::car_operator::ActiveModel = operator.into();

        if let Some(first_name) = changes.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = changes.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = changes.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(department) = changes.department {
            active_model.department = ActiveValue::Set(department);
        }
        if let Some(is_active) = changes.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Operator::from_entity(updated))
    }

    /// Soft deletes an operator by clearing `is_active`
    ///
    /// # Returns
    /// - `Ok(true)`: Operator deactivated
    /// - `Ok(false)`: Operator not found
    /// - `Err(DbErr)`: Database error
    pub async fn soft_delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::CarOperator::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Returns `true` when the error is the employee number unique constraint.
pub fn is_duplicate_employee_number(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("employee_number"))
}
