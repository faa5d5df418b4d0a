//! HTTP handlers for worry-time endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::journal::{parse_worry_id, WorryResponse};
use crate::adapters::http::state::{AppState, Envelope};
use crate::application::{ScheduleView, WorryApp};
use crate::domain::worry::WorryError;

use super::dto::{
    AnswerRequest, CompleteResponse, InsightsRequest, PostponeResponse, QueueQuery,
    TriageResponse, UpdateSettingsRequest, WorryTimeResponse,
};

fn triage_of(app: &WorryApp) -> TriageResponse {
    TriageResponse::build(app.triage().state(), app.worries())
}

/// GET /worry-time - Queues, current triage, and past reflections
pub async fn worry_time(
    State(state): State<AppState>,
    Query(query): Query<QueueQuery>,
) -> Json<Envelope<WorryTimeResponse>> {
    let app = state.app().lock().await;
    let response = WorryTimeResponse {
        schedule: app.schedule_at(&Local::now()),
        new_queue: app.new_queue(query.order).into_iter().map(WorryResponse::from).collect(),
        postponed_queue: app
            .postponed_queue(query.order)
            .into_iter()
            .map(WorryResponse::from)
            .collect(),
        triage: triage_of(&app),
        past_reflections: app.past_reflections(),
    };
    Json(Envelope::new(&app, response))
}

/// PUT /worry-time/settings - Change the daily slot
pub async fn update_settings(
    State(state): State<AppState>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<Envelope<ScheduleView>>, ApiError> {
    let mut app = state.app().lock().await;
    app.update_settings(req.hour, req.minute, req.duration)?;
    let schedule = app.schedule_at(&Local::now());
    Ok(Json(Envelope::new(&app, schedule)))
}

/// POST /worry-time/select/:id - Start triage for a worry
pub async fn select_worry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<TriageResponse>>, ApiError> {
    let id = parse_worry_id(&id)?;
    let mut app = state.app().lock().await;
    app.select_worry(id)?;
    Ok(Json(Envelope::new(&app, triage_of(&app))))
}

/// POST /worry-time/answer - Answer the current decision question
pub async fn answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<Envelope<TriageResponse>>, ApiError> {
    let mut app = state.app().lock().await;
    app.answer(req.answer)?;
    Ok(Json(Envelope::new(&app, triage_of(&app))))
}

/// PUT /worry-time/insights - Replace the draft insights
pub async fn set_insights(
    State(state): State<AppState>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<Envelope<TriageResponse>>, ApiError> {
    let mut app = state.app().lock().await;
    app.set_insights(req.insights)?;
    Ok(Json(Envelope::new(&app, triage_of(&app))))
}

/// POST /worry-time/postpone - Defer the selected worry to the next slot
pub async fn postpone(
    State(state): State<AppState>,
) -> Result<Json<Envelope<PostponeResponse>>, ApiError> {
    let mut app = state.app().lock().await;
    let postponed = app.postpone()?;
    let response = PostponeResponse {
        worry_id: postponed.worry_id,
        postponed_until: postponed.until,
        triage: triage_of(&app),
    };
    Ok(Json(Envelope::new(&app, response)))
}

/// POST /worry-time/complete - Finish the reflection
pub async fn complete(
    State(state): State<AppState>,
) -> Result<Json<Envelope<CompleteResponse>>, ApiError> {
    let mut app = state.app().lock().await;
    let selected = app.triage().selected();
    app.complete_reflection()?;

    // complete() only succeeds with a selection, so `selected` is set here.
    let id = selected.ok_or_else(|| ApiError::bad_request("No worry is selected"))?;
    let worry = app.worries().get(id).ok_or_else(|| WorryError::not_found(id))?;
    let response = CompleteResponse {
        worry: WorryResponse::from(worry),
        triage: triage_of(&app),
    };
    Ok(Json(Envelope::new(&app, response)))
}

/// POST /worry-time/cancel - Deselect without changes
pub async fn cancel(State(state): State<AppState>) -> Json<Envelope<TriageResponse>> {
    let mut app = state.app().lock().await;
    app.cancel_triage();
    Json(Envelope::new(&app, triage_of(&app)))
}
