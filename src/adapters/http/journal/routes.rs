//! HTTP routes for the home, log, and learn endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{home, learn, log, log_worry, toggle_worry};

pub fn journal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/log", get(log))
        .route("/log/worries", post(log_worry))
        .route("/log/worries/:id/toggle", post(toggle_worry))
        .route("/learn", get(learn))
}
