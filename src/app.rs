use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/habits", post(handlers::add_habit))
        .route("/api/habits/move", post(handlers::move_habit))
        .route("/api/habits/delete", post(handlers::delete_habit))
        .route("/api/log", post(handlers::log_minutes))
        .route("/api/gratitude", post(handlers::save_gratitude))
        .route("/api/report", get(handlers::get_report))
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/history", get(handlers::get_history))
        .route("/api/premium", post(handlers::set_premium))
        .with_state(state)
}
