use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;

use metrica_core::error::Result;
use metrica_core::model::{Metric, MetricId, MetricKind};

use crate::handlers::MetricUpdater;
use crate::service::{Getter, Saver};

/// Applies the accumulation rule and persists incoming metrics.
///
/// A counter is read, summed and written back while its own identity lock is
/// held, so concurrent updates of one counter through the same service never
/// lose an increment. Distinct counters don't wait on each other. Gauges are
/// written without reading and without locking.
pub struct MetricUpdateService {
    getter: Arc<dyn Getter>,
    saver: Arc<dyn Saver>,
    counter_locks: DashMap<MetricId, Arc<Mutex<()>>>,
}

impl MetricUpdateService {
    pub fn new(getter: Arc<dyn Getter>, saver: Arc<dyn Saver>) -> Self {
        Self {
            getter,
            saver,
            counter_locks: DashMap::new(),
        }
    }

    /// Persist every present metric in input order and return the final value
    /// of each identity touched, sorted by name.
    ///
    /// The first storage error aborts the call. Metrics saved before it stay
    /// saved.
    pub async fn update(&self, metrics: Vec<Option<Metric>>) -> Result<Vec<Metric>> {
        let mut updated: BTreeMap<MetricId, Metric> = BTreeMap::new();

        for metric in metrics.into_iter().flatten() {
            let saved = match metric.kind() {
                MetricKind::Counter => self.accumulate_counter(metric).await?,
                MetricKind::Gauge => self.persist(metric).await?,
            };
            updated.insert(saved.id(), saved);
        }

        Ok(updated.into_values().collect())
    }

    fn counter_lock(&self, id: &MetricId) -> Arc<Mutex<()>> {
        // The shard guard is released before anyone awaits the mutex.
        let entry = self
            .counter_locks
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())));
        Arc::clone(entry.value())
    }

    async fn accumulate_counter(&self, metric: Metric) -> Result<Metric> {
        let id = metric.id();
        let lock = self.counter_lock(&id);
        let _guard = lock.lock().await;

        let current = self.getter.get(&id).await.map_err(|e| {
            tracing::warn!(metric = %id, error = %e, "metric read failed");
            e
        })?;

        // Two's-complement wrap on overflow, like any other i64 sum.
        let stored = current.and_then(|m| m.value().delta());
        let merged = match (stored, metric.value().delta()) {
            (Some(stored), Some(incoming)) => metric.with_delta(incoming.wrapping_add(stored))?,
            _ => metric,
        };

        self.persist(merged).await
    }

    async fn persist(&self, metric: Metric) -> Result<Metric> {
        if let Err(e) = self.saver.save(&metric).await {
            tracing::warn!(metric = %metric.id(), error = %e, "metric save failed");
            return Err(e);
        }
        tracing::debug!(
            name = %metric.name(),
            kind = %metric.kind(),
            value = %metric.value(),
            "metric updated"
        );
        Ok(metric)
    }
}

#[async_trait]
impl MetricUpdater for MetricUpdateService {
    async fn update(&self, metrics: Vec<Option<Metric>>) -> Result<Vec<Metric>> {
        MetricUpdateService::update(self, metrics).await
    }
}
