//! SolutionRepository - persisted problem-solving records.

use std::sync::Arc;

use crate::domain::foundation::SolutionId;
use crate::domain::solution::{ProblemSolution, SolutionNotFound};
use crate::ports::{keys, KeyValueStore};

use super::persisted::{PersistStatus, PersistedCollection};

/// Problem-solving records, written through to the `problemSolutions` key.
pub struct SolutionRepository {
    solutions: PersistedCollection<ProblemSolution>,
}

impl SolutionRepository {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            solutions: PersistedCollection::load(store, keys::PROBLEM_SOLUTIONS),
        }
    }

    pub fn add(&mut self, solution: ProblemSolution) -> PersistStatus {
        let id = solution.id();
        self.solutions.items_mut().push(solution);
        let persist = self.solutions.persist();
        tracing::info!(solution_id = %id, "problem solution saved");
        persist
    }

    pub fn update(&mut self, solution: ProblemSolution) -> Result<PersistStatus, SolutionNotFound> {
        let id = solution.id();
        let slot = self
            .solutions
            .items_mut()
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(SolutionNotFound(id))?;
        *slot = solution;
        Ok(self.solutions.persist())
    }

    pub fn delete(&mut self, id: SolutionId) -> Result<PersistStatus, SolutionNotFound> {
        let items = self.solutions.items_mut();
        let index = items
            .iter()
            .position(|s| s.id() == id)
            .ok_or(SolutionNotFound(id))?;
        items.remove(index);
        let persist = self.solutions.persist();
        tracing::info!(solution_id = %id, "problem solution deleted");
        Ok(persist)
    }

    pub fn list(&self) -> &[ProblemSolution] {
        self.solutions.items()
    }

    pub fn get(&self, id: SolutionId) -> Option<&ProblemSolution> {
        self.list().iter().find(|s| s.id() == id)
    }

    /// Completed records, newest first.
    pub fn completed(&self) -> Vec<&ProblemSolution> {
        let mut done: Vec<_> = self.list().iter().filter(|s| s.is_completed()).collect();
        done.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        done
    }

    pub fn unsaved_notice(&self) -> Option<String> {
        self.solutions.unsaved_notice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::solution::SolutionContent;
    use chrono::{TimeZone, Utc};

    fn solution(worry: &str, day: u32) -> ProblemSolution {
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap());
        ProblemSolution::completed(
            SolutionContent {
                worry: worry.to_string(),
                ..Default::default()
            },
            now,
        )
    }

    #[test]
    fn completed_lists_newest_first() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut repo = SolutionRepository::load(store);
        repo.add(solution("first", 1));
        repo.add(solution("third", 3));
        repo.add(solution("second", 2));

        let worries: Vec<_> = repo.completed().iter().map(|s| s.worry()).collect();
        assert_eq!(worries, vec!["third", "second", "first"]);
    }

    #[test]
    fn delete_removes_and_persists() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut repo = SolutionRepository::load(store.clone());
        let kept = solution("kept", 1);
        let gone = solution("gone", 2);
        let gone_id = gone.id();
        repo.add(kept);
        repo.add(gone);

        assert!(repo.delete(gone_id).unwrap().is_saved());
        assert_eq!(repo.delete(gone_id), Err(SolutionNotFound(gone_id)));

        let reloaded = SolutionRepository::load(store);
        assert_eq!(reloaded.list().len(), 1);
        assert_eq!(reloaded.list()[0].worry(), "kept");
    }

    #[test]
    fn update_replaces_record() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut repo = SolutionRepository::load(store);
        let mut record = solution("Money", 1);
        repo.add(record.clone());

        record.append_progress("Saved $50");
        repo.update(record.clone()).unwrap();

        assert_eq!(repo.get(record.id()).unwrap().progress(), "Saved $50");
    }

    #[test]
    fn update_unknown_is_not_found() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut repo = SolutionRepository::load(store);
        let stray = solution("stray", 1);
        let id = stray.id();

        assert_eq!(repo.update(stray), Err(SolutionNotFound(id)));
    }
}
