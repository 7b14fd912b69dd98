use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use business::domain::errors::RepositoryError;

/// Memory-resident records keyed by a store-assigned identifier.
///
/// The identifier counter and the records share a single lock, so allocating
/// an id and inserting the record under it happen as one step. Identifiers
/// start at 1, only grow and are never handed out twice.
pub struct InMemoryStore<V> {
    state: Mutex<StoreState<V>>,
}

struct StoreState<V> {
    last_id: u64,
    records: BTreeMap<u64, V>,
}

impl<V: Clone> Default for InMemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> InMemoryStore<V> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                last_id: 0,
                records: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState<V>>, RepositoryError> {
        self.state.lock().map_err(|_| RepositoryError::Persistence)
    }

    /// Allocates the next identifier and stores the record built for it.
    pub fn insert_with(&self, build: impl FnOnce(u64) -> V) -> Result<V, RepositoryError> {
        let mut state = self.lock()?;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or(RepositoryError::Persistence)?;
        let record = build(id);
        state.records.insert(id, record.clone());
        state.last_id = id;
        Ok(record)
    }

    pub fn get(&self, id: u64) -> Result<V, RepositoryError> {
        let state = self.lock()?;
        state
            .records
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    /// All records in identifier order, which is also creation order.
    pub fn all(&self) -> Result<Vec<V>, RepositoryError> {
        let state = self.lock()?;
        Ok(state.records.values().cloned().collect())
    }

    /// Read-modify-write of one record under the lock.
    ///
    /// `apply` works on a copy; the stored record is only replaced when it
    /// succeeds, so a rejected change leaves nothing half-written.
    pub fn modify(
        &self,
        id: u64,
        apply: impl FnOnce(&mut V) -> Result<(), RepositoryError>,
    ) -> Result<V, RepositoryError> {
        let mut state = self.lock()?;
        let record = state
            .records
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;
        let mut next = record.clone();
        apply(&mut next)?;
        *record = next.clone();
        Ok(next)
    }
}
