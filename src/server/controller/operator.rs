use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::operator::{CreateOperatorDto, OperatorListItemDto, OperatorQueryDto, UpdateOperatorDto},
    server::{
        error::AppError,
        middleware::actor::Actor,
        model::operator::{
            CreateOperatorParams, OperatorFilter, OperatorWithCurrentCar, UpdateOperatorParams,
        },
        service::operator::OperatorService,
        state::AppState,
    },
};

/// Create a new operator.
///
/// # Returns
/// - `201 Created` - The created operator
/// - `400 Bad Request` - Missing name or employee number, invalid email
/// - `409 Conflict` - Employee number already exists
pub async fn create_operator(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateOperatorDto>,
) -> Result<impl IntoResponse, AppError> {
    let operator = OperatorService::new(&state.db)
        .create(CreateOperatorParams::from_dto(payload), actor.id())
        .await?;

    Ok((StatusCode::CREATED, Json(operator.into_dto())))
}

/// List operators with the car each one currently drives.
///
/// Query parameters `isActive`, `department` and `search` are optional filters.
pub async fn list_operators(
    State(state): State<AppState>,
    Query(query): Query<OperatorQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let operators: Vec<OperatorListItemDto> = OperatorService::new(&state.db)
        .list(OperatorFilter::from_dto(query))
        .await?
        .into_iter()
        .map(OperatorWithCurrentCar::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(operators)))
}

/// Get an operator with its current assignment and assignment history.
pub async fn get_operator(
    State(state): State<AppState>,
    Path(operator_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = OperatorService::new(&state.db).get(&operator_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Update an operator's names, contact fields, department or active flag.
pub async fn update_operator(
    State(state): State<AppState>,
    actor: Actor,
    Path(operator_id): Path<String>,
    Json(payload): Json<UpdateOperatorDto>,
) -> Result<impl IntoResponse, AppError> {
    let operator = OperatorService::new(&state.db)
        .update(
            &operator_id,
            UpdateOperatorParams::from_dto(payload),
            actor.id(),
        )
        .await?;

    Ok((StatusCode::OK, Json(operator.into_dto())))
}

/// Soft delete an operator.
///
/// # Returns
/// - `204 No Content` - Operator deactivated
/// - `400 Bad Request` - Operator still has an active car assignment
/// - `404 Not Found` - Operator not found
pub async fn delete_operator(
    State(state): State<AppState>,
    actor: Actor,
    Path(operator_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    OperatorService::new(&state.db)
        .delete(&operator_id, actor.id())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
