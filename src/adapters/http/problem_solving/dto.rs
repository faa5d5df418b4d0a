//! HTTP DTOs for problem-solving endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::solution::{
    AnalysisSide, ProblemSolution, ProblemSolvingWizard, SolutionAnalysis, WizardStep,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct DraftTextRequest {
    pub value: String,
}

/// Request to add one item to a list field.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnsureAnalysisRequest {
    pub solution: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddAnalysisItemRequest {
    pub solution: String,
    pub side: AnalysisSide,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoveAnalysisItemRequest {
    pub solution: String,
    pub side: AnalysisSide,
    pub index: usize,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub key: WizardStep,
    pub index: usize,
    pub total: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub guidance: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl From<WizardStep> for StepResponse {
    fn from(step: WizardStep) -> Self {
        Self {
            key: step,
            index: step.index(),
            total: WizardStep::ORDER.len(),
            title: step.title(),
            description: step.description(),
            guidance: step.guidance(),
            placeholder: step.placeholder(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub worry: String,
    pub practical_problem: String,
    pub solutions: Vec<String>,
    pub analysis: Vec<SolutionAnalysis>,
    pub chosen_solution: String,
    pub action_plan: Vec<String>,
    pub progress: String,
    pub review: String,
}

/// Wizard position, draft, and whether the current step may be left.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardResponse {
    pub step: StepResponse,
    pub can_advance: bool,
    pub unanalysed_solutions: Vec<String>,
    pub draft: DraftResponse,
}

impl From<&ProblemSolvingWizard> for WizardResponse {
    fn from(wizard: &ProblemSolvingWizard) -> Self {
        let draft = wizard.draft();
        Self {
            step: wizard.step().into(),
            can_advance: wizard.can_advance(),
            unanalysed_solutions: wizard
                .unanalysed_solutions()
                .into_iter()
                .map(str::to_string)
                .collect(),
            draft: DraftResponse {
                worry: draft.worry.clone(),
                practical_problem: draft.practical_problem.clone(),
                solutions: draft.solutions.clone(),
                analysis: draft.analysis.clone(),
                chosen_solution: draft.chosen_solution.clone(),
                action_plan: draft.action_plan.clone(),
                progress: draft.progress.clone(),
                review: draft.review.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSolvingResponse {
    pub wizard: WizardResponse,
    pub past_solutions: Vec<ProblemSolution>,
}

/// Result of a forward move. `finished` is set when the move committed a
/// record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceResponse {
    pub wizard: WizardResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<ProblemSolution>,
}
