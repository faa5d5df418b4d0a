//! Solution module - structured problem solving for practical worries.
//!
//! - `aggregate` - `ProblemSolution`, the committed record
//! - `step` - the eight wizard steps and the field each fills in
//! - `wizard` - the draft-editing state machine

mod aggregate;
mod errors;
mod step;
mod wizard;

pub use aggregate::{ProblemSolution, SolutionAnalysis, SolutionContent, SolutionStatus};
pub use errors::{SolutionNotFound, WizardError};
pub use step::{ListField, StepInput, TextField, WizardStep};
pub use wizard::{AnalysisSide, ProblemSolvingWizard, WizardAdvance};
