//! Counter storage.
//!
//! `Store` is the persistence seam used by the manager. `MemoryStore` backs
//! it with a sharded `DashMap`, which gives per-key atomicity without any
//! external locking: a racing pair of `store` calls for the same id resolves
//! to exactly one winner, and `update` performs its read-modify-write while
//! holding the shard write lock for that key.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::counter::Counter;
use crate::error::{Result, TallyError};

/// Concurrency-safe persistence for counters keyed by id.
pub trait Store: Send + Sync {
    /// Insert `counter` only if no record exists for its id.
    fn store(&self, counter: Counter) -> Result<()>;

    /// Fetch the counter for `id`.
    fn load(&self, id: &str) -> Result<Counter>;

    /// Atomically apply `apply` to the record for `id` and return the result.
    /// If `apply` fails the stored record is left as it was.
    fn update(&self, id: &str, apply: &dyn Fn(&mut Counter) -> Result<()>) -> Result<Counter>;

    /// Remove the record for `id`.
    fn delete(&self, id: &str) -> Result<()>;
}

/// In-process store. State is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: DashMap<String, Counter>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }
}

/// A record filed under a key other than its own id.
fn check_key(key: &str, counter: &Counter) -> Result<()> {
    if counter.id != key {
        return Err(TallyError::Corrupted(key.to_string()));
    }
    Ok(())
}

impl Store for MemoryStore {
    fn store(&self, counter: Counter) -> Result<()> {
        match self.data.entry(counter.id.clone()) {
            Entry::Occupied(_) => Err(TallyError::AlreadyExists(counter.id)),
            Entry::Vacant(slot) => {
                slot.insert(counter);
                Ok(())
            }
        }
    }

    fn load(&self, id: &str) -> Result<Counter> {
        let entry = self
            .data
            .get(id)
            .ok_or_else(|| TallyError::NotFound(id.to_string()))?;
        check_key(entry.key(), entry.value())?;
        Ok(entry.value().clone())
    }

    fn update(&self, id: &str, apply: &dyn Fn(&mut Counter) -> Result<()>) -> Result<Counter> {
        let mut entry = self
            .data
            .get_mut(id)
            .ok_or_else(|| TallyError::NotFound(id.to_string()))?;
        check_key(entry.key(), entry.value())?;

        let mut next = entry.value().clone();
        apply(&mut next)?;
        *entry.value_mut() = next.clone();
        Ok(next)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.data
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TallyError::NotFound(id.to_string()))
    }
}
