//! Metric update service and the storage capabilities it depends on.
//!
//! `Getter`/`Saver` are declared here, on the consumer side, so the service
//! can run against any backend (or a test fake) implementing them.

pub mod update;

use async_trait::async_trait;

use metrica_core::error::Result;
use metrica_core::model::{Metric, MetricId};

pub use update::MetricUpdateService;

/// Read capability. `Ok(None)` means the identity has never been saved.
#[async_trait]
pub trait Getter: Send + Sync {
    async fn get(&self, id: &MetricId) -> Result<Option<Metric>>;
}

/// Write capability. Replaces whatever is stored for `metric.id()`.
#[async_trait]
pub trait Saver: Send + Sync {
    async fn save(&self, metric: &Metric) -> Result<()>;
}
