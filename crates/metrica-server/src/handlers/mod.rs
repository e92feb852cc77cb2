//! HTTP handlers (ingestion boundary).
//!
//! Handlers depend on the `MetricUpdater` trait rather than the concrete
//! service, so the router can be exercised against a fake.

pub mod update;

use async_trait::async_trait;

use metrica_core::error::Result;
use metrica_core::model::Metric;

pub use update::{not_found, update_metric, UpdatePath};

/// Batch metric update, as seen by the transport layer.
#[async_trait]
pub trait MetricUpdater: Send + Sync {
    async fn update(&self, metrics: Vec<Option<Metric>>) -> Result<Vec<Metric>>;
}
