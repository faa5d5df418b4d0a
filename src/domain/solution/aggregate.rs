//! ProblemSolution aggregate - the record a finished wizard run produces.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{SolutionId, StateMachine, Timestamp};

/// Lifecycle of a problem-solving record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SolutionStatus {
    #[default]
    InProgress,
    Completed,
}

impl StateMachine for SolutionStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SolutionStatus::InProgress => vec![SolutionStatus::Completed],
            SolutionStatus::Completed => vec![],
        }
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::InProgress => write!(f, "In Progress"),
            SolutionStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Pros and cons weighed for one candidate solution, keyed by its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionAnalysis {
    pub solution: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl SolutionAnalysis {
    pub fn new(solution: impl Into<String>) -> Self {
        Self {
            solution: solution.into(),
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }
}

/// Outcome of working a worry through the eight problem-solving steps.
///
/// # Invariants
///
/// - `analysis` holds exactly one entry per entry of `solutions`
/// - `status == Completed` implies `completed_at` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSolution {
    id: SolutionId,
    created_at: Timestamp,
    worry: String,
    practical_problem: String,
    solutions: Vec<String>,
    analysis: Vec<SolutionAnalysis>,
    chosen_solution: String,
    action_plan: Vec<String>,
    progress: String,
    review: String,
    status: SolutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<Timestamp>,
}

/// Field values collected by the wizard, handed over at finalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionContent {
    pub worry: String,
    pub practical_problem: String,
    pub solutions: Vec<String>,
    pub analysis: Vec<SolutionAnalysis>,
    pub chosen_solution: String,
    pub action_plan: Vec<String>,
    pub progress: String,
    pub review: String,
}

impl ProblemSolution {
    /// Builds a completed record. Created and completed share one instant
    /// since the wizard only commits at the very end.
    pub fn completed(content: SolutionContent, now: Timestamp) -> Self {
        Self {
            id: SolutionId::new(),
            created_at: now,
            worry: content.worry,
            practical_problem: content.practical_problem,
            solutions: content.solutions,
            analysis: content.analysis,
            chosen_solution: content.chosen_solution,
            action_plan: content.action_plan,
            progress: content.progress,
            review: content.review,
            status: SolutionStatus::Completed,
            completed_at: Some(now),
        }
    }

    pub fn id(&self) -> SolutionId {
        self.id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn worry(&self) -> &str {
        &self.worry
    }

    pub fn practical_problem(&self) -> &str {
        &self.practical_problem
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    pub fn analysis(&self) -> &[SolutionAnalysis] {
        &self.analysis
    }

    pub fn analysis_for(&self, solution: &str) -> Option<&SolutionAnalysis> {
        self.analysis.iter().find(|a| a.solution == solution)
    }

    pub fn chosen_solution(&self) -> &str {
        &self.chosen_solution
    }

    pub fn action_plan(&self) -> &[String] {
        &self.action_plan
    }

    pub fn progress(&self) -> &str {
        &self.progress
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn status(&self) -> SolutionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SolutionStatus::Completed
    }

    /// Appends a later progress note to a stored record.
    pub fn append_progress(&mut self, note: &str) {
        let note = note.trim();
        if note.is_empty() {
            return;
        }
        if self.progress.is_empty() {
            self.progress = note.to_string();
        } else {
            self.progress = format!("{}\n{}", self.progress, note);
        }
    }

    /// Replaces the review text of a stored record.
    pub fn revise_review(&mut self, review: &str) {
        self.review = review.trim().to_string();
    }
}
