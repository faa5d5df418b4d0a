//! WorryRepository - the persisted list of logged worries.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, WorryId};
use crate::domain::worry::{Worry, WorryError, WorryStatus};
use crate::ports::{keys, KeyValueStore};

use super::persisted::{PersistStatus, PersistedCollection, Saved};

/// Ordering for the worry-time queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Worries in insertion order, written through to the `worries` key.
pub struct WorryRepository {
    worries: PersistedCollection<Worry>,
}

impl WorryRepository {
    /// Loads the collection. Absent or malformed data yields an empty list.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            worries: PersistedCollection::load(store, keys::WORRIES),
        }
    }

    /// Logs a new worry now.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if the text is blank after trimming
    pub fn add(&mut self, content: &str) -> Result<Saved<Worry>, WorryError> {
        self.add_at(content, Timestamp::now())
    }

    /// Logs a new worry with an explicit creation time.
    pub fn add_at(&mut self, content: &str, at: Timestamp) -> Result<Saved<Worry>, WorryError> {
        let worry = Worry::logged_at(content, at)?;
        self.worries.items_mut().push(worry.clone());
        let persist = self.worries.persist();
        tracing::info!(worry_id = %worry.id(), "worry logged");
        Ok(Saved {
            value: worry,
            persist,
        })
    }

    /// Replaces the stored worry with the same id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no worry has this id; nothing is written
    pub fn update(&mut self, worry: Worry) -> Result<PersistStatus, WorryError> {
        let id = worry.id();
        let slot = self
            .worries
            .items_mut()
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| WorryError::not_found(id))?;
        *slot = worry;
        let persist = self.worries.persist();
        tracing::info!(worry_id = %id, "worry updated");
        Ok(persist)
    }

    /// Flips the dealt-with flag. Status is left alone.
    pub fn toggle_dealt_with(&mut self, id: WorryId) -> Result<PersistStatus, WorryError> {
        let worry = self
            .worries
            .items_mut()
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| WorryError::not_found(id))?;
        worry.toggle_dealt_with();
        let dealt_with = worry.is_dealt_with();
        let persist = self.worries.persist();
        tracing::info!(worry_id = %id, dealt_with, "worry toggled");
        Ok(persist)
    }

    /// All worries in insertion order.
    pub fn list(&self) -> &[Worry] {
        self.worries.items()
    }

    pub fn get(&self, id: WorryId) -> Option<&Worry> {
        self.list().iter().find(|w| w.id() == id)
    }

    pub fn with_status(&self, status: WorryStatus) -> Vec<&Worry> {
        self.list().iter().filter(|w| w.status() == status).collect()
    }

    /// Worries with `status`, ordered by creation time.
    pub fn queue(&self, status: WorryStatus, order: QueueOrder) -> Vec<&Worry> {
        let mut queue = self.with_status(status);
        // Stable sort keeps insertion order among equal timestamps.
        match order {
            QueueOrder::OldestFirst => queue.sort_by_key(|w| *w.created_at()),
            QueueOrder::NewestFirst => {
                queue.sort_by(|a, b| b.created_at().cmp(a.created_at()))
            }
        }
        queue
    }

    /// Notice for the most recent failed write, cleared by the next success.
    pub fn unsaved_notice(&self) -> Option<String> {
        self.worries.unsaved_notice()
    }
}
