use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::{get, post}};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/setup", post(handlers::setup))
        .route("/tasks/present", post(handlers::add_present))
        .route("/tasks/future", post(handlers::add_future))
        .route("/tasks/:id/toggle", post(handlers::toggle))
        .route("/tasks/:id/due", post(handlers::change_due))
        .route("/api/board", get(handlers::get_board))
        .route("/api/setup", post(handlers::api_setup))
        .route("/api/tasks", post(handlers::api_add))
        .route("/api/tasks/:id/toggle", post(handlers::api_toggle))
        .route("/api/tasks/:id/due", post(handlers::api_change_due))
        .with_state(state)
}
