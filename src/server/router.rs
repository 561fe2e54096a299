use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        assignment::{
            assign_operator, get_car_assignment, get_car_history, get_operator_assignment,
            get_operator_history, search_assignments, unassign_operator,
        },
        operator::{
            create_operator, delete_operator, get_operator, list_operators, update_operator,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cars/{car_id}/assign", post(assign_operator))
        .route("/api/cars/{car_id}/unassign", post(unassign_operator))
        .route("/api/cars/{car_id}/assignment", get(get_car_assignment))
        .route("/api/cars/{car_id}/assignments", get(get_car_history))
        .route("/api/assignments", get(search_assignments))
        .route("/api/operators", post(create_operator).get(list_operators))
        .route(
            "/api/operators/{operator_id}",
            get(get_operator).put(update_operator).delete(delete_operator),
        )
        .route(
            "/api/operators/{operator_id}/assignment",
            get(get_operator_assignment),
        )
        .route(
            "/api/operators/{operator_id}/assignments",
            get(get_operator_history),
        )
}
