//! Entity list store
//!
//! The ordered, id-unique collection one view fetched. It is refreshed as a
//! whole on load and patched in place after confirmed mutations.

use std::collections::{HashMap, HashSet};

use shared::{Record, StatusRecord};

use crate::ClientResult;

/// Progress of the last list fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Shown as a persistent banner until the next load
    Failed(String),
}

/// Per-view record list
#[derive(Debug, Clone)]
pub struct EntityListStore<T: Record> {
    records: Vec<T>,
    load: LoadState,
    /// Bumped by every `begin_load`; only the newest fetch may settle
    generation: u64,
    /// Rows with a mutation on the wire
    in_flight: HashSet<String>,
    /// Last mutation fault per row
    row_errors: HashMap<String, String>,
}

impl<T: Record> Default for EntityListStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            load: LoadState::Idle,
            generation: 0,
            in_flight: HashSet::new(),
            row_errors: HashMap::new(),
        }
    }
}

impl<T: Record> EntityListStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Load fault message, if the last fetch failed
    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start a fetch and return its generation
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.load = LoadState::Loading;
        self.generation
    }

    /// Settle the fetch started as `generation`. A fault keeps whatever was
    /// listed before.
    ///
    /// Returns false, changing nothing, when a newer fetch has started since.
    pub fn finish_load(&mut self, generation: u64, result: ClientResult<Vec<T>>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "dropping superseded list");
            return false;
        }
        match result {
            Ok(records) => {
                self.replace_all(records);
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load list");
                self.load = LoadState::Failed(e.to_string());
            }
        }
        true
    }

    /// Replace the whole list, keeping the first of any duplicate ids.
    ///
    /// Row errors belong to the old list and are dropped. In-flight marks
    /// survive for rows still listed, since their mutations are still on the
    /// wire.
    pub fn replace_all(&mut self, records: Vec<T>) {
        let mut seen = HashSet::with_capacity(records.len());
        self.records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id().to_string());
                if !fresh {
                    tracing::warn!(id = record.id(), "dropping duplicate record");
                }
                fresh
            })
            .collect();
        self.row_errors.clear();
        self.in_flight.retain(|id| seen.contains(id));
    }

    /// Swap in the service's copy of a record. Returns false if absent.
    pub fn replace_record(&mut self, record: T) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove by id, preserving the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        self.row_errors.remove(id);
        Some(self.records.remove(index))
    }

    // ========== In-flight guard ==========

    /// Mark a row busy. False when it already was.
    pub fn mark_in_flight(&mut self, id: &str) -> bool {
        self.in_flight.insert(id.to_string())
    }

    pub fn clear_in_flight(&mut self, id: &str) {
        self.in_flight.remove(id);
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }

    // ========== Row errors ==========

    pub fn set_row_error(&mut self, id: &str, message: impl Into<String>) {
        self.row_errors.insert(id.to_string(), message.into());
    }

    pub fn clear_row_error(&mut self, id: &str) {
        self.row_errors.remove(id);
    }

    pub fn row_error(&self, id: &str) -> Option<&str> {
        self.row_errors.get(id).map(String::as_str)
    }
}

impl<T: StatusRecord> EntityListStore<T> {
    /// Replace only the status of the matching record. Returns false if absent.
    pub fn patch_status(&mut self, id: &str, status: T::Status) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.set_status(status);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use shared::models::{Customer, CustomerStatus};

    fn customer(id: &str, status: CustomerStatus) -> Customer {
        Customer {
            id: id.to_string(),
            first_name: Some(format!("First{}", id)),
            last_name: None,
            name: None,
            email: Some(format!("{}@example.com", id)),
            phone: None,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_replace_all_drops_duplicate_ids() {
        let mut store = EntityListStore::new();
        store.replace_all(vec![
            customer("1", CustomerStatus::Pending),
            customer("2", CustomerStatus::Active),
            customer("1", CustomerStatus::Rejected),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("1").unwrap().status, CustomerStatus::Pending);
    }

    #[test]
    fn test_patch_status_keeps_other_fields() {
        let mut store = EntityListStore::new();
        store.replace_all(vec![customer("1", CustomerStatus::Pending)]);
        let before = store.get("1").unwrap().clone();

        assert!(store.patch_status("1", CustomerStatus::Active));
        let after = store.get("1").unwrap();
        assert_eq!(after.status, CustomerStatus::Active);
        assert_eq!(after.email, before.email);
        assert_eq!(after.first_name, before.first_name);

        assert!(!store.patch_status("missing", CustomerStatus::Active));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = EntityListStore::new();
        store.replace_all(vec![
            customer("1", CustomerStatus::Active),
            customer("2", CustomerStatus::Active),
            customer("3", CustomerStatus::Active),
        ]);
        assert!(store.remove("2").is_some());
        let ids: Vec<_> = store.records().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert!(store.remove("2").is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_records() {
        let mut store = EntityListStore::new();
        let first = store.begin_load();
        assert!(store.finish_load(first, Ok(vec![customer("1", CustomerStatus::Active)])));
        assert_eq!(store.load_state(), &LoadState::Loaded);

        let second = store.begin_load();
        assert!(store.is_loading());
        assert!(store.finish_load(second, Err(ClientError::Internal("boom".into()))));
        assert_eq!(store.load_error(), Some("Internal error: boom"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let mut store = EntityListStore::new();
        let all = store.begin_load();
        let active = store.begin_load();

        assert!(store.finish_load(active, Ok(vec![customer("2", CustomerStatus::Active)])));
        assert!(!store.finish_load(
            all,
            Ok(vec![
                customer("1", CustomerStatus::Pending),
                customer("2", CustomerStatus::Active),
            ])
        ));
        let ids: Vec<_> = store.records().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
        assert_eq!(store.load_state(), &LoadState::Loaded);
    }

    #[test]
    fn test_refresh_keeps_in_flight_rows_still_listed() {
        let mut store = EntityListStore::new();
        store.replace_all(vec![
            customer("1", CustomerStatus::Pending),
            customer("2", CustomerStatus::Pending),
        ]);
        assert!(store.mark_in_flight("1"));
        assert!(store.mark_in_flight("2"));
        store.set_row_error("1", "stale");

        store.replace_all(vec![customer("1", CustomerStatus::Pending)]);
        assert!(store.is_in_flight("1"));
        assert!(!store.is_in_flight("2"));
        assert!(store.row_error("1").is_none());
    }

    #[test]
    fn test_in_flight_guard() {
        let mut store: EntityListStore<Customer> = EntityListStore::new();
        assert!(store.mark_in_flight("1"));
        assert!(!store.mark_in_flight("1"));
        store.clear_in_flight("1");
        assert!(!store.is_in_flight("1"));
    }
}
