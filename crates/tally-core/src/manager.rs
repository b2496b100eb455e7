//! Counter lifecycle orchestration on top of a `Store`.

use std::sync::Arc;

use crate::counter::Counter;
use crate::error::Result;
use crate::store::Store;

/// Operations the HTTP boundary (or any other front end) consumes.
pub trait CounterManager: Send + Sync {
    /// Create a counter at zero. Fails with `AlreadyExists` if `id` is live.
    fn add(&self, id: &str) -> Result<()>;
    /// Read a counter without mutating it.
    fn get(&self, id: &str) -> Result<Counter>;
    /// Add one to a counter and return its new state.
    fn inc(&self, id: &str) -> Result<Counter>;
    /// Remove a counter.
    fn delete(&self, id: &str) -> Result<()>;
}

/// Stateless manager. Every store failure is returned as-is; nothing is
/// retried or wrapped.
#[derive(Clone)]
pub struct Manager {
    store: Arc<dyn Store>,
}

impl Manager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl CounterManager for Manager {
    fn add(&self, id: &str) -> Result<()> {
        self.store.store(Counter::new(id))?;
        tracing::debug!(%id, "counter added");
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Counter> {
        self.store.load(id)
    }

    fn inc(&self, id: &str) -> Result<Counter> {
        // Load, add and write back under one per-key lock.
        let counter = self.store.update(id, &Counter::inc)?;
        tracing::debug!(%id, value = counter.value, "counter incremented");
        Ok(counter)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(id)?;
        tracing::debug!(%id, "counter deleted");
        Ok(())
    }
}
