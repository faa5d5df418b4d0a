//! WizardStep - the eight problem-solving steps and their ordering.
//!
//! # Step Order
//!
//! 1. Worry → 2. PracticalProblem → 3. Solutions → 4. Analysis →
//! 5. ChosenSolution → 6. ActionPlan → 7. Progress → 8. Review

use serde::{Deserialize, Serialize};

/// Free-text fields of a problem-solving record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Worry,
    PracticalProblem,
    ChosenSolution,
    Progress,
    Review,
}

/// List fields edited one item at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    Solutions,
    ActionPlan,
}

/// What kind of input a step collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepInput {
    Text(TextField),
    List(ListField),
    Analysis,
}

/// One step of the problem-solving wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Worry,
    PracticalProblem,
    Solutions,
    Analysis,
    ChosenSolution,
    ActionPlan,
    Progress,
    Review,
}

impl WizardStep {
    /// The canonical order of steps.
    pub const ORDER: [WizardStep; 8] = [
        WizardStep::Worry,
        WizardStep::PracticalProblem,
        WizardStep::Solutions,
        WizardStep::Analysis,
        WizardStep::ChosenSolution,
        WizardStep::ActionPlan,
        WizardStep::Progress,
        WizardStep::Review,
    ];

    pub fn first() -> WizardStep {
        Self::ORDER[0]
    }

    pub fn last() -> WizardStep {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    /// 0-based position in the sequence.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Worry => 0,
            WizardStep::PracticalProblem => 1,
            WizardStep::Solutions => 2,
            WizardStep::Analysis => 3,
            WizardStep::ChosenSolution => 4,
            WizardStep::ActionPlan => 5,
            WizardStep::Progress => 6,
            WizardStep::Review => 7,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(|i| Self::ORDER.get(i).copied())
    }

    pub fn is_last(&self) -> bool {
        *self == Self::last()
    }

    /// The draft field this step fills in.
    pub fn input(&self) -> StepInput {
        match self {
            WizardStep::Worry => StepInput::Text(TextField::Worry),
            WizardStep::PracticalProblem => StepInput::Text(TextField::PracticalProblem),
            WizardStep::Solutions => StepInput::List(ListField::Solutions),
            WizardStep::Analysis => StepInput::Analysis,
            WizardStep::ChosenSolution => StepInput::Text(TextField::ChosenSolution),
            WizardStep::ActionPlan => StepInput::List(ListField::ActionPlan),
            WizardStep::Progress => StepInput::Text(TextField::Progress),
            WizardStep::Review => StepInput::Text(TextField::Review),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Worry => "Identify the Worry",
            WizardStep::PracticalProblem => "Define the Problem",
            WizardStep::Solutions => "Generate Solutions",
            WizardStep::Analysis => "Analyze Solutions",
            WizardStep::ChosenSolution => "Choose Solution",
            WizardStep::ActionPlan => "Create Action Plan",
            WizardStep::Progress => "Track Progress",
            WizardStep::Review => "Review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Worry => "What specific worry would you like to work on solving?",
            WizardStep::PracticalProblem => {
                "Convert your worry into a specific, practical problem that can be solved."
            }
            WizardStep::Solutions => "List all possible solutions, without judging them yet.",
            WizardStep::Analysis => "Consider the pros and cons of each solution.",
            WizardStep::ChosenSolution => "Select the most practical and feasible solution.",
            WizardStep::ActionPlan => "Break down your chosen solution into specific steps.",
            WizardStep::Progress => "Note your progress and any challenges faced.",
            WizardStep::Review => "Reflect on how well the solution worked.",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            WizardStep::Worry => {
                "Choose a worry that feels manageable and has potential for practical action. \
                 This helps break down bigger concerns into solvable pieces."
            }
            WizardStep::PracticalProblem => {
                "Make it specific and actionable. Instead of \"I'm worried about money,\" \
                 try \"I need to reduce my monthly expenses by $200.\""
            }
            WizardStep::Solutions => {
                "Include both obvious and creative solutions. Don't evaluate them yet; \
                 even seemingly impractical ideas can lead to good solutions."
            }
            WizardStep::Analysis => {
                "Be realistic about the resources (time, money, energy) needed for each \
                 solution. Consider both short-term and long-term impacts."
            }
            WizardStep::ChosenSolution => {
                "Pick the solution that offers the best balance of effectiveness and \
                 feasibility. It doesn't have to be perfect; you can adjust as needed."
            }
            WizardStep::ActionPlan => {
                "Make each step concrete and achievable. Include who, what, when, and \
                 where for each action item."
            }
            WizardStep::Progress => {
                "Regular progress updates help you stay accountable and identify what's \
                 working or needs adjustment."
            }
            WizardStep::Review => {
                "Consider what worked, what didn't, and what you learned. This helps \
                 improve your problem-solving skills for the future."
            }
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            WizardStep::Worry => Some("Describe your worry in detail..."),
            WizardStep::PracticalProblem => Some("Reframe your worry as a concrete problem..."),
            WizardStep::Solutions => Some("Add a potential solution..."),
            WizardStep::Analysis => None,
            WizardStep::ChosenSolution => {
                Some("Describe your chosen solution and why you picked it...")
            }
            WizardStep::ActionPlan => Some("Add an action step..."),
            WizardStep::Progress => Some("Describe your progress so far..."),
            WizardStep::Review => Some("Write your reflection..."),
        }
    }
}
