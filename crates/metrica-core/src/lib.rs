//! metrica core: metric domain types and the shared error surface.
//!
//! This crate defines the metric identity/payload model and the error type
//! shared by the server and its tests. It carries no transport or runtime
//! dependencies so it can be reused by other front ends.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MetricaError`/`Result` so malformed
//! input never crashes the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{MetricaError, Result};
pub use model::{Metric, MetricId, MetricKind, MetricValue};
