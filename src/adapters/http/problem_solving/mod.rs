//! HTTP adapter for the problem-solving wizard.

mod dto;
mod handlers;
mod routes;

pub use dto::{AdvanceResponse, ProblemSolvingResponse, StepResponse, WizardResponse};
pub use routes::problem_solving_routes;
