//! Metric repositories over a shared `KeyValueStore`.
//!
//! Both adapters are stateless: they only translate between metric identities
//! and the store's generic key/value shape. In-memory access cannot fail, the
//! `Result` is there so a fallible backend can implement the same traits.

use std::sync::Arc;

use async_trait::async_trait;

use metrica_core::error::Result;
use metrica_core::model::{Metric, MetricId};

use crate::service::{Getter, Saver};
use crate::storage::KeyValueStore;

/// Store handle shared by the read and write adapters.
pub type SharedMetricStore = Arc<dyn KeyValueStore<MetricId, Metric>>;

pub struct MetricsMemoryGetRepository {
    storage: SharedMetricStore,
}

impl MetricsMemoryGetRepository {
    pub fn new(storage: SharedMetricStore) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Getter for MetricsMemoryGetRepository {
    async fn get(&self, id: &MetricId) -> Result<Option<Metric>> {
        Ok(self.storage.get(id))
    }
}

pub struct MetricsMemorySaveRepository {
    storage: SharedMetricStore,
}

impl MetricsMemorySaveRepository {
    pub fn new(storage: SharedMetricStore) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Saver for MetricsMemorySaveRepository {
    async fn save(&self, metric: &Metric) -> Result<()> {
        self.storage.put(metric.id(), metric.clone());
        Ok(())
    }
}
