//! HTTP handlers for problem-solving endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::{AppState, Envelope};
use crate::application::{WizardProgress, WorryApp};
use crate::domain::foundation::SolutionId;
use crate::domain::solution::{ProblemSolvingWizard, TextField, WizardError};

use super::dto::{
    AddAnalysisItemRequest, AddItemRequest, AdvanceResponse, DraftTextRequest,
    EnsureAnalysisRequest, ProblemSolvingResponse, RemoveAnalysisItemRequest, WizardResponse,
};

type WizardResult = Result<Json<Envelope<WizardResponse>>, ApiError>;

fn wizard_of(app: &WorryApp) -> WizardResponse {
    WizardResponse::from(app.wizard())
}

/// Applies a draft edit and answers with the updated wizard.
async fn edit<T>(
    state: &AppState,
    f: impl FnOnce(&mut ProblemSolvingWizard) -> Result<T, WizardError>,
) -> WizardResult {
    let mut app = state.app().lock().await;
    f(app.wizard_mut())?;
    Ok(Json(Envelope::new(&app, wizard_of(&app))))
}

/// GET /problem-solving - Wizard and completed records
pub async fn problem_solving(
    State(state): State<AppState>,
) -> Json<Envelope<ProblemSolvingResponse>> {
    let app = state.app().lock().await;
    let response = ProblemSolvingResponse {
        wizard: wizard_of(&app),
        past_solutions: app.past_solutions(),
    };
    Json(Envelope::new(&app, response))
}

/// PUT /problem-solving/draft/:field - Replace a text field
pub async fn set_draft_text(
    State(state): State<AppState>,
    Path(field): Path<TextField>,
    Json(req): Json<DraftTextRequest>,
) -> WizardResult {
    edit(&state, |w| {
        w.set_text(field, req.value);
        Ok(())
    })
    .await
}

/// POST /problem-solving/solutions
pub async fn add_solution(
    State(state): State<AppState>,
    Json(req): Json<AddItemRequest>,
) -> WizardResult {
    edit(&state, |w| w.add_solution(&req.text)).await
}

/// DELETE /problem-solving/solutions/:index
pub async fn remove_solution(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> WizardResult {
    edit(&state, |w| w.remove_solution(index)).await
}

/// POST /problem-solving/action-plan
pub async fn add_action_step(
    State(state): State<AppState>,
    Json(req): Json<AddItemRequest>,
) -> WizardResult {
    edit(&state, |w| w.add_action_step(&req.text)).await
}

/// DELETE /problem-solving/action-plan/:index
pub async fn remove_action_step(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> WizardResult {
    edit(&state, |w| w.remove_action_step(index)).await
}

/// POST /problem-solving/analysis - Create an empty analysis entry
pub async fn ensure_analysis(
    State(state): State<AppState>,
    Json(req): Json<EnsureAnalysisRequest>,
) -> WizardResult {
    edit(&state, |w| w.ensure_analysis(&req.solution).map(|_| ())).await
}

/// POST /problem-solving/analysis/items - Add a pro or con
pub async fn add_analysis_item(
    State(state): State<AppState>,
    Json(req): Json<AddAnalysisItemRequest>,
) -> WizardResult {
    edit(&state, |w| w.add_analysis_item(&req.solution, req.side, &req.text)).await
}

/// POST /problem-solving/analysis/items/remove - Remove a pro or con
pub async fn remove_analysis_item(
    State(state): State<AppState>,
    Json(req): Json<RemoveAnalysisItemRequest>,
) -> WizardResult {
    edit(&state, |w| w.remove_analysis_item(&req.solution, req.side, req.index)).await
}

/// POST /problem-solving/next - Advance, finishing on the last step
pub async fn next_step(
    State(state): State<AppState>,
) -> Result<Json<Envelope<AdvanceResponse>>, ApiError> {
    let mut app = state.app().lock().await;
    let finished = match app.wizard_next()? {
        WizardProgress::Moved(_) => None,
        WizardProgress::Finished(saved) => Some(saved.value),
    };
    let response = AdvanceResponse {
        wizard: wizard_of(&app),
        finished,
    };
    Ok(Json(Envelope::new(&app, response)))
}

/// POST /problem-solving/previous
pub async fn previous_step(State(state): State<AppState>) -> WizardResult {
    edit(&state, |w| Ok(w.previous())).await
}

/// POST /problem-solving/reset - Discard the draft
pub async fn reset(State(state): State<AppState>) -> WizardResult {
    edit(&state, |w| {
        w.reset();
        Ok(())
    })
    .await
}

/// DELETE /problem-solving/history/:id - Delete a completed record
pub async fn delete_solution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ProblemSolvingResponse>>, ApiError> {
    let id = id
        .parse::<SolutionId>()
        .map_err(|_| ApiError::bad_request("Invalid solution ID"))?;
    let mut app = state.app().lock().await;
    app.delete_solution(id)?;
    let response = ProblemSolvingResponse {
        wizard: wizard_of(&app),
        past_solutions: app.past_solutions(),
    };
    Ok(Json(Envelope::new(&app, response)))
}
