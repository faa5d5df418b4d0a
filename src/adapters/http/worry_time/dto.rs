//! HTTP DTOs for worry-time endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::journal::WorryResponse;
use crate::application::{QueueOrder, ReflectionEntry, ScheduleView, TriageState, WorryRepository};
use crate::domain::foundation::{Timestamp, WorryId};
use crate::domain::worry::{DecisionQuestion, DecisionRecord, WorryCategory};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingsRequest {
    pub hour: u32,
    pub minute: u32,
    pub duration: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub answer: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsightsRequest {
    pub insights: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueueQuery {
    #[serde(default)]
    pub order: QueueOrder,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub key: &'static str,
    pub index: usize,
    pub total: usize,
    pub prompt: &'static str,
    pub helper: &'static str,
}

impl From<DecisionQuestion> for QuestionResponse {
    fn from(question: DecisionQuestion) -> Self {
        Self {
            key: question.key(),
            index: question.index(),
            total: DecisionQuestion::ORDER.len(),
            prompt: question.prompt(),
            helper: question.helper(),
        }
    }
}

/// Snapshot of the triage flow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResponse {
    /// `idle`, `deciding`, or `reflecting`.
    pub stage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worry: Option<WorryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<DecisionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<WorryCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
}

impl TriageResponse {
    pub fn build(state: &TriageState, worries: &WorryRepository) -> Self {
        let worry_of = |id: &WorryId| worries.get(*id).map(WorryResponse::from);
        match state {
            TriageState::Idle => Self {
                stage: "idle",
                worry: None,
                question: None,
                answers: None,
                category: None,
                category_label: None,
                insights: None,
            },
            TriageState::Deciding { worry_id, tree } => Self {
                stage: "deciding",
                worry: worry_of(worry_id),
                question: tree.current_question().map(QuestionResponse::from),
                answers: Some(*tree.answers()),
                category: None,
                category_label: None,
                insights: None,
            },
            TriageState::Reflecting {
                worry_id,
                record,
                category,
                insights,
            } => Self {
                stage: "reflecting",
                worry: worry_of(worry_id),
                question: None,
                answers: Some(*record),
                category: Some(*category),
                category_label: Some(category.label()),
                insights: Some(insights.clone()),
            },
        }
    }
}

/// Everything the worry-time screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorryTimeResponse {
    pub schedule: ScheduleView,
    pub new_queue: Vec<WorryResponse>,
    pub postponed_queue: Vec<WorryResponse>,
    pub triage: TriageResponse,
    pub past_reflections: Vec<ReflectionEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostponeResponse {
    pub worry_id: WorryId,
    pub postponed_until: Timestamp,
    pub triage: TriageResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteResponse {
    pub worry: WorryResponse,
    pub triage: TriageResponse,
}
