//! Generic persisted entity store.
//!
//! # Responsibility
//! - Provide add/update/remove/all over one persisted collection.
//! - Serialize the whole collection to JSON and hand it to the backend.
//!
//! # Invariants
//! - Records keep insertion order; ids are unique within a collection.
//! - A load that cannot be decoded yields an empty collection, not an error.
//! - Batch removal applies positions in descending order so earlier removals
//!   never invalidate later ones.

use crate::storage::KvBackend;
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Requirements for a record managed by [`EntityStore`].
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Stable unique id of this record.
    fn id(&self) -> Uuid;
}

impl Record for crate::model::todo::TodoItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for crate::model::user::User {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Insertion-ordered collection persisted as a JSON array under one key.
pub struct EntityStore<T: Record, B: KvBackend> {
    key: &'static str,
    records: Vec<T>,
    backend: B,
}

impl<T: Record, B: KvBackend> EntityStore<T, B> {
    /// Opens the store, loading prior records from the backend.
    ///
    /// A missing key, a backend read failure or an undecodable payload all
    /// start the collection empty; the latter two are logged.
    pub fn open(backend: B, key: &'static str) -> Self {
        let records = match backend.get(key) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<T>>(&bytes) {
                Ok(records) => records,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=discarded key={key} error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=store_load module=store status=error key={key} error={err}");
                Vec::new()
            }
        };

        Self {
            key,
            records,
            backend,
        }
    }

    /// Returns the insertion-ordered snapshot of all records.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and persists the collection.
    pub fn add(&mut self, record: T) {
        self.records.push(record);
        self.persist();
    }

    /// Mutates the record with the given id in place, then persists.
    ///
    /// Returns `false` without persisting when the id is unknown (no-op).
    pub fn update(&mut self, id: Uuid, mutate: impl FnOnce(&mut T)) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            return false;
        };
        mutate(record);
        self.persist();
        true
    }

    /// Removes records by stable position in a single batch, then persists.
    ///
    /// Out-of-range positions are ignored. Persists even when nothing matched
    /// so callers get uniform write-through semantics.
    pub fn remove_at(&mut self, positions: &BTreeSet<usize>) {
        // Descending order keeps remaining positions valid while removing.
        for &position in positions.iter().rev() {
            if position < self.records.len() {
                self.records.remove(position);
            }
        }
        self.persist();
    }

    /// Replaces the whole collection, then persists. Used by bulk seeding.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
        self.persist();
    }

    fn persist(&mut self) {
        let bytes = match serde_json::to_vec(&self.records) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error key={} stage=encode error={err}",
                    self.key
                );
                return;
            }
        };
        if let Err(err) = self.backend.set(self.key, &bytes) {
            error!(
                "event=store_persist module=store status=error key={} stage=write error={err}",
                self.key
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EntityStore;
    use crate::model::todo::TodoItem;
    use crate::storage::{KvBackend, MemoryBackend, TODO_ITEMS_KEY};
    use chrono::Utc;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn store_with(titles: &[&str]) -> EntityStore<TodoItem, MemoryBackend> {
        let mut store = EntityStore::open(MemoryBackend::new(), TODO_ITEMS_KEY);
        for title in titles {
            store.add(TodoItem::new(*title, Utc::now()));
        }
        store
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store = store_with(&["a", "b", "c"]);
        let titles: Vec<&str> = store.all().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = store_with(&["only"]);
        let changed = store.update(Uuid::new_v4(), |todo| todo.title.push('!'));
        assert!(!changed);
        assert_eq!(store.all()[0].title, "only");
    }

    #[test]
    fn remove_batch_keeps_middle_item() {
        let mut store = store_with(&["first", "second", "third"]);
        let positions: BTreeSet<usize> = [0, 2].into_iter().collect();
        store.remove_at(&positions);

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].title, "second");
    }

    #[test]
    fn remove_ignores_out_of_range_positions() {
        let mut store = store_with(&["keep"]);
        let positions: BTreeSet<usize> = [5, 9].into_iter().collect();
        store.remove_at(&positions);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_payload_loads_as_empty() {
        let mut backend = MemoryBackend::new();
        backend.set(TODO_ITEMS_KEY, b"{not json]").unwrap();

        let store: EntityStore<TodoItem, MemoryBackend> =
            EntityStore::open(backend, TODO_ITEMS_KEY);
        assert!(store.is_empty());
    }
}
