//! Shared application state for the metrica server.
//!
//! Wires the in-memory store, its repositories and the update service, and
//! hands the router a cheap-to-clone handle.

use std::sync::Arc;

use metrica_core::model::{Metric, MetricId};

use crate::config::ServerConfig;
use crate::handlers::MetricUpdater;
use crate::service::MetricUpdateService;
use crate::storage::{
    MemoryStore, MetricsMemoryGetRepository, MetricsMemorySaveRepository, SharedMetricStore,
};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    updater: Arc<dyn MetricUpdater>,
}

impl AppState {
    /// Fresh, empty in-memory store.
    pub fn new(cfg: ServerConfig) -> Self {
        let store: SharedMetricStore = Arc::new(MemoryStore::<MetricId, Metric>::new());
        Self::with_store(cfg, store)
    }

    /// Serve updates out of an existing store.
    pub fn with_store(cfg: ServerConfig, store: SharedMetricStore) -> Self {
        let getter = Arc::new(MetricsMemoryGetRepository::new(Arc::clone(&store)));
        let saver = Arc::new(MetricsMemorySaveRepository::new(store));
        let service = MetricUpdateService::new(getter, saver);

        Self::with_updater(cfg, Arc::new(service))
    }

    pub fn with_updater(cfg: ServerConfig, updater: Arc<dyn MetricUpdater>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, updater }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn updater(&self) -> Arc<dyn MetricUpdater> {
        Arc::clone(&self.inner.updater)
    }
}
