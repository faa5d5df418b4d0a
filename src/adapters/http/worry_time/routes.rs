//! HTTP routes for worry-time endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    answer, cancel, complete, postpone, select_worry, set_insights, update_settings, worry_time,
};

pub fn worry_time_routes() -> Router<AppState> {
    Router::new()
        .route("/worry-time", get(worry_time))
        .route("/worry-time/settings", put(update_settings))
        .route("/worry-time/select/:id", post(select_worry))
        .route("/worry-time/answer", post(answer))
        .route("/worry-time/insights", put(set_insights))
        .route("/worry-time/postpone", post(postpone))
        .route("/worry-time/complete", post(complete))
        .route("/worry-time/cancel", post(cancel))
}
