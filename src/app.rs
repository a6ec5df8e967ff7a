use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits))
        .route("/api/habits", post(handlers::add_habit))
        .route("/api/habits/:id/view", get(handlers::get_habit_view))
        .route("/api/habits/:id/days", post(handlers::add_day))
        .route("/api/habits/:id/days/:index", delete(handlers::delete_day))
        .with_state(state)
}
