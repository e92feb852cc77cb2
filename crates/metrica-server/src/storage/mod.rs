//! Process-resident metric storage.
//!
//! `memory` holds the generic concurrent map; `repository` adapts it to the
//! `Getter`/`Saver` capabilities the update service depends on.

pub mod memory;
pub mod repository;

pub use memory::{KeyValueStore, MemoryStore};
pub use repository::{MetricsMemoryGetRepository, MetricsMemorySaveRepository, SharedMetricStore};
