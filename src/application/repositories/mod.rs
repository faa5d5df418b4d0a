//! Repositories - in-memory collections written through to a `KeyValueStore`.

mod persisted;
mod settings_repository;
mod solution_repository;
mod worry_repository;

pub use persisted::{PersistStatus, Saved};
pub use settings_repository::SettingsRepository;
pub use solution_repository::SolutionRepository;
pub use worry_repository::{QueueOrder, WorryRepository};
