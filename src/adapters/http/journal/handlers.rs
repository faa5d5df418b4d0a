//! HTTP handlers for the home, log, and learn endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::{AppState, Envelope};
use crate::application::{HomeView, LearnView, LogView};
use crate::domain::foundation::WorryId;
use crate::domain::worry::WorryError;

use super::dto::{LogWorryRequest, WorryResponse};

/// GET / - Counts and the next worry time
pub async fn home(State(state): State<AppState>) -> Json<Envelope<HomeView>> {
    let app = state.app().lock().await;
    Json(Envelope::new(&app, app.home()))
}

/// GET /log - Unresolved worries
pub async fn log(State(state): State<AppState>) -> Json<Envelope<LogView>> {
    let app = state.app().lock().await;
    Json(Envelope::new(&app, app.log_view()))
}

/// POST /log/worries - Log a new worry
pub async fn log_worry(
    State(state): State<AppState>,
    Json(req): Json<LogWorryRequest>,
) -> Result<(StatusCode, Json<Envelope<WorryResponse>>), ApiError> {
    let mut app = state.app().lock().await;
    let saved = app.log_worry(&req.content)?;
    let response = WorryResponse::from(&saved.value);
    Ok((StatusCode::CREATED, Json(Envelope::new(&app, response))))
}

/// POST /log/worries/:id/toggle - Flip the dealt-with flag
pub async fn toggle_worry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<WorryResponse>>, ApiError> {
    let id = parse_worry_id(&id)?;
    let mut app = state.app().lock().await;
    app.toggle_dealt_with(id)?;
    let worry = app.worries().get(id).ok_or_else(|| WorryError::not_found(id))?;
    let response = WorryResponse::from(worry);
    Ok(Json(Envelope::new(&app, response)))
}

/// GET /learn - Static explanation of the method
pub async fn learn(State(state): State<AppState>) -> Json<Envelope<LearnView>> {
    let app = state.app().lock().await;
    Json(Envelope::new(&app, app.learn()))
}

pub(crate) fn parse_worry_id(raw: &str) -> Result<WorryId, ApiError> {
    raw.parse::<WorryId>()
        .map_err(|_| ApiError::bad_request("Invalid worry ID"))
}
