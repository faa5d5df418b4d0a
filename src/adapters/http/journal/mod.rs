//! HTTP adapter for the home, log, and learn screens.

mod dto;
mod handlers;
mod routes;

pub use dto::{LogWorryRequest, WorryResponse};
pub(crate) use handlers::parse_worry_id;
pub use routes::journal_routes;
