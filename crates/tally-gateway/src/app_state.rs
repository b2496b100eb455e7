//! Shared application state for the tally gateway.
//!
//! Holds the parsed config, the counter manager the HTTP layer calls into,
//! and the metrics registry. Everything is injected here; handlers reach no
//! globals.

use std::sync::Arc;

use tally_core::{CounterManager, Manager, MemoryStore};

use crate::config::TallyConfig;
use crate::obs::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: TallyConfig,
    manager: Arc<dyn CounterManager>,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Wire an in-memory store behind the default manager.
    pub fn new(cfg: TallyConfig) -> Self {
        let manager = Manager::new(Arc::new(MemoryStore::new()));
        Self::with_manager(cfg, Arc::new(manager))
    }

    /// Use an arbitrary manager implementation.
    pub fn with_manager(cfg: TallyConfig, manager: Arc<dyn CounterManager>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                manager,
                metrics: Arc::new(GatewayMetrics::new()),
            }),
        }
    }

    pub fn cfg(&self) -> &TallyConfig {
        &self.inner.cfg
    }

    pub fn manager(&self) -> &dyn CounterManager {
        self.inner.manager.as_ref()
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
