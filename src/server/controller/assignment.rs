use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::assignment::{AssignOperatorDto, AssignmentDto, AssignmentQueryDto, UnassignOperatorDto},
    server::{
        error::AppError,
        middleware::actor::Actor,
        model::assignment::{
            AssignToCarParams, Assignment, AssignmentFilter, AssignmentSubject,
            UnassignFromCarParams,
        },
        service::assignment::AssignmentService,
        state::AppState,
    },
};

/// Assign an operator to a car.
///
/// # Returns
/// - `201 Created` - The created active assignment
/// - `400 Bad Request` - Invalid input, backdated start, inactive car or operator
/// - `401 Unauthorized` - Missing actor
/// - `404 Not Found` - Car or operator not found
/// - `409 Conflict` - Car or operator already has an active assignment
pub async fn assign_operator(
    State(state): State<AppState>,
    actor: Actor,
    Path(car_id): Path<String>,
    Json(payload): Json<AssignOperatorDto>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = AssignmentService::new(&state.db)
        .assign_to_car(AssignToCarParams::from_dto(car_id, payload), actor.id())
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

/// End the active assignment of a car.
///
/// # Returns
/// - `204 No Content` - Assignment closed
/// - `400 Bad Request` - Invalid input or end date before start date
/// - `401 Unauthorized` - Missing actor
/// - `404 Not Found` - The car has no active assignment
pub async fn unassign_operator(
    State(state): State<AppState>,
    actor: Actor,
    Path(car_id): Path<String>,
    Json(payload): Json<UnassignOperatorDto>,
) -> Result<impl IntoResponse, AppError> {
    AssignmentService::new(&state.db)
        .unassign_from_car(UnassignFromCarParams::from_dto(car_id, payload), actor.id())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the active assignment of a car, or `null`.
pub async fn get_car_assignment(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = AssignmentService::new(&state.db)
        .get_active_assignment(AssignmentSubject::Car(car_id))
        .await?;

    Ok((StatusCode::OK, Json(assignment.map(Assignment::into_dto))))
}

/// Get the assignment history of a car, newest first.
pub async fn get_car_history(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let history = history(&state, AssignmentFilter::for_car(car_id)).await?;

    Ok((StatusCode::OK, Json(history)))
}

/// Get the active assignment of an operator, or `null`.
pub async fn get_operator_assignment(
    State(state): State<AppState>,
    Path(operator_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = AssignmentService::new(&state.db)
        .get_active_assignment(AssignmentSubject::Operator(operator_id))
        .await?;

    Ok((StatusCode::OK, Json(assignment.map(Assignment::into_dto))))
}

/// Get the assignment history of an operator, newest first.
pub async fn get_operator_history(
    State(state): State<AppState>,
    Path(operator_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let history = history(&state, AssignmentFilter::for_operator(operator_id)).await?;

    Ok((StatusCode::OK, Json(history)))
}

/// Search assignments by car, operator, active state and date range.
///
/// # Returns
/// - `200 OK` - Matching assignments, newest first
/// - `400 Bad Request` - `from` or `to` is not `YYYY-MM-DD`
pub async fn search_assignments(
    State(state): State<AppState>,
    Query(query): Query<AssignmentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = AssignmentFilter::from_dto(query)?;
    let history = history(&state, filter).await?;

    Ok((StatusCode::OK, Json(history)))
}

async fn history(state: &AppState, filter: AssignmentFilter) -> Result<Vec<AssignmentDto>, AppError> {
    let assignments = AssignmentService::new(&state.db).get_history(filter).await?;

    Ok(assignments.into_iter().map(Assignment::into_dto).collect())
}
