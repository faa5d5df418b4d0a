//! Problem-Solving Wizard - an eight-step linear form over a draft record.
//!
//! Forward moves are gated by the current step's completeness check;
//! backward moves never are. Every edit touches only the in-memory draft.
//! Finishing the last step yields a completed [`ProblemSolution`] and resets
//! the wizard to an empty draft at the first step.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{
    ListField, ProblemSolution, SolutionAnalysis, SolutionContent, StepInput, TextField,
    WizardError, WizardStep,
};

/// Which side of an analysis entry an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSide {
    Pros,
    Cons,
}

/// Result of a forward move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAdvance {
    Moved(WizardStep),
    Finished(ProblemSolution),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSolvingWizard {
    step: WizardStep,
    draft: SolutionContent,
}

impl ProblemSolvingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::first(),
            draft: SolutionContent::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &SolutionContent {
        &self.draft
    }

    /// Drops the draft and returns to the first step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the current step's input is complete.
    pub fn can_advance(&self) -> bool {
        self.is_step_complete(self.step)
    }

    /// Completeness check for any step.
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step.input() {
            StepInput::Text(field) => !self.text(field).trim().is_empty(),
            StepInput::List(field) => !self.list(field).is_empty(),
            StepInput::Analysis => self.unanalysed_solutions().is_empty(),
        }
    }

    /// Solutions that still lack an analysis entry.
    pub fn unanalysed_solutions(&self) -> Vec<&str> {
        self.draft
            .solutions
            .iter()
            .filter(|s| !self.draft.analysis.iter().any(|a| &a.solution == *s))
            .map(String::as_str)
            .collect()
    }

    /// Moves forward, or finalizes on the last step.
    ///
    /// # Errors
    ///
    /// - `StepIncomplete` if the current step's input is not complete
    pub fn next(&mut self, now: Timestamp) -> Result<WizardAdvance, WizardError> {
        if !self.can_advance() {
            return Err(WizardError::StepIncomplete(self.step));
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                tracing::debug!(step = next.title(), "wizard advanced");
                Ok(WizardAdvance::Moved(next))
            }
            None => {
                let content = std::mem::take(&mut self.draft);
                self.reset();
                let solution = ProblemSolution::completed(content, now);
                tracing::debug!(solution_id = %solution.id(), "wizard finished");
                Ok(WizardAdvance::Finished(solution))
            }
        }
    }

    /// Moves back one step. Stays put on the first step.
    pub fn previous(&mut self) -> WizardStep {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
        self.step
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Draft edits
    // ─────────────────────────────────────────────────────────────────────────

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Worry => &self.draft.worry,
            TextField::PracticalProblem => &self.draft.practical_problem,
            TextField::ChosenSolution => &self.draft.chosen_solution,
            TextField::Progress => &self.draft.progress,
            TextField::Review => &self.draft.review,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::Worry => &mut self.draft.worry,
            TextField::PracticalProblem => &mut self.draft.practical_problem,
            TextField::ChosenSolution => &mut self.draft.chosen_solution,
            TextField::Progress => &mut self.draft.progress,
            TextField::Review => &mut self.draft.review,
        };
        *slot = value.into();
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Solutions => &self.draft.solutions,
            ListField::ActionPlan => &self.draft.action_plan,
        }
    }

    /// Adds a candidate solution.
    ///
    /// # Errors
    ///
    /// - `EmptyItem` for blank text
    /// - `DuplicateSolution` if the same text is already listed
    pub fn add_solution(&mut self, text: &str) -> Result<(), WizardError> {
        let text = non_empty(text)?;
        if self.draft.solutions.iter().any(|s| s == text) {
            return Err(WizardError::DuplicateSolution(text.to_string()));
        }
        self.draft.solutions.push(text.to_string());
        Ok(())
    }

    /// Removes a candidate solution together with its analysis entry.
    pub fn remove_solution(&mut self, index: usize) -> Result<String, WizardError> {
        let removed = remove_at(&mut self.draft.solutions, index)?;
        self.draft.analysis.retain(|a| a.solution != removed);
        Ok(removed)
    }

    pub fn add_action_step(&mut self, text: &str) -> Result<(), WizardError> {
        let text = non_empty(text)?;
        self.draft.action_plan.push(text.to_string());
        Ok(())
    }

    pub fn remove_action_step(&mut self, index: usize) -> Result<String, WizardError> {
        remove_at(&mut self.draft.action_plan, index)
    }

    /// Makes sure a listed solution has an analysis entry, possibly with
    /// no pros or cons.
    ///
    /// # Errors
    ///
    /// - `UnknownSolution` if the text is not among the listed solutions
    pub fn ensure_analysis(&mut self, solution: &str) -> Result<&SolutionAnalysis, WizardError> {
        let index = self.analysis_index(solution)?;
        Ok(&self.draft.analysis[index])
    }

    /// Adds a pro or con, creating the analysis entry on first use.
    pub fn add_analysis_item(
        &mut self,
        solution: &str,
        side: AnalysisSide,
        text: &str,
    ) -> Result<(), WizardError> {
        let text = non_empty(text)?.to_string();
        let index = self.analysis_index(solution)?;
        side_mut(&mut self.draft.analysis[index], side).push(text);
        Ok(())
    }

    /// Removes a pro or con. The analysis entry itself stays.
    pub fn remove_analysis_item(
        &mut self,
        solution: &str,
        side: AnalysisSide,
        index: usize,
    ) -> Result<String, WizardError> {
        let entry = self
            .draft
            .analysis
            .iter_mut()
            .find(|a| a.solution == solution)
            .ok_or_else(|| WizardError::UnknownSolution(solution.to_string()))?;
        remove_at(side_mut(entry, side), index)
    }

    pub fn add_pro(&mut self, solution: &str, text: &str) -> Result<(), WizardError> {
        self.add_analysis_item(solution, AnalysisSide::Pros, text)
    }

    pub fn add_con(&mut self, solution: &str, text: &str) -> Result<(), WizardError> {
        self.add_analysis_item(solution, AnalysisSide::Cons, text)
    }

    pub fn remove_pro(&mut self, solution: &str, index: usize) -> Result<String, WizardError> {
        self.remove_analysis_item(solution, AnalysisSide::Pros, index)
    }

    pub fn remove_con(&mut self, solution: &str, index: usize) -> Result<String, WizardError> {
        self.remove_analysis_item(solution, AnalysisSide::Cons, index)
    }

    fn analysis_index(&mut self, solution: &str) -> Result<usize, WizardError> {
        if !self.draft.solutions.iter().any(|s| s == solution) {
            return Err(WizardError::UnknownSolution(solution.to_string()));
        }
        if let Some(i) = self.draft.analysis.iter().position(|a| a.solution == solution) {
            return Ok(i);
        }
        self.draft.analysis.push(SolutionAnalysis::new(solution));
        Ok(self.draft.analysis.len() - 1)
    }
}

impl Default for ProblemSolvingWizard {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(text: &str) -> Result<&str, WizardError> {
    let text = text.trim();
    if text.is_empty() {
        Err(WizardError::EmptyItem)
    } else {
        Ok(text)
    }
}

fn remove_at(items: &mut Vec<String>, index: usize) -> Result<String, WizardError> {
    if index >= items.len() {
        return Err(WizardError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}

fn side_mut(entry: &mut SolutionAnalysis, side: AnalysisSide) -> &mut Vec<String> {
    match side {
        AnalysisSide::Pros => &mut entry.pros,
        AnalysisSide::Cons => &mut entry.cons,
    }
}
