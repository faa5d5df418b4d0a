//! HTTP adapter for the worry-time screen.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRequest, InsightsRequest, QuestionResponse, TriageResponse, UpdateSettingsRequest,
    WorryTimeResponse,
};
pub use routes::worry_time_routes;
