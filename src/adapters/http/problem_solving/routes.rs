//! HTTP routes for problem-solving endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    add_action_step, add_analysis_item, add_solution, delete_solution, ensure_analysis,
    next_step, previous_step, problem_solving, remove_action_step, remove_analysis_item,
    remove_solution, reset, set_draft_text,
};

pub fn problem_solving_routes() -> Router<AppState> {
    Router::new()
        .route("/problem-solving", get(problem_solving))
        .route("/problem-solving/draft/:field", put(set_draft_text))
        .route("/problem-solving/solutions", post(add_solution))
        .route("/problem-solving/solutions/:index", delete(remove_solution))
        .route("/problem-solving/action-plan", post(add_action_step))
        .route("/problem-solving/action-plan/:index", delete(remove_action_step))
        .route("/problem-solving/analysis", post(ensure_analysis))
        .route("/problem-solving/analysis/items", post(add_analysis_item))
        .route("/problem-solving/analysis/items/remove", post(remove_analysis_item))
        .route("/problem-solving/next", post(next_step))
        .route("/problem-solving/previous", post(previous_step))
        .route("/problem-solving/reset", post(reset))
        .route("/problem-solving/history/:id", delete(delete_solution))
}
