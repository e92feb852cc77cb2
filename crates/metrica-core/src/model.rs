//! Metric domain types.
//!
//! A metric is addressed by its identity, the `(name, kind)` pair. The kind is
//! carried by the payload variant itself, so a counter can never hold a float
//! and a gauge can never hold a delta.
//!
//! Textual parsing (`Metric::from_path_parts`) is transport-agnostic: the HTTP
//! boundary hands over raw path segments and maps the returned error codes to
//! statuses.

use std::fmt;
use std::str::FromStr;

use crate::error::{MetricaError, Result};

/// Metric kind. Textual form is lowercase (`counter`, `gauge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = MetricaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "counter" => Ok(MetricKind::Counter),
            "gauge" => Ok(MetricKind::Gauge),
            other => Err(MetricaError::BadRequest(format!(
                "unknown metric kind: {other}"
            ))),
        }
    }
}

/// Storage identity of a metric.
///
/// Ordering is by name first, then kind, which is the order update results
/// are reported in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricId {
    pub name: String,
    pub kind: MetricKind,
}

impl MetricId {
    pub fn new(name: impl Into<String>, kind: MetricKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// Metric payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Amount to add to the running total.
    Counter(i64),
    /// Latest observed value.
    Gauge(f64),
}

impl MetricValue {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricValue::Counter(_) => MetricKind::Counter,
            MetricValue::Gauge(_) => MetricKind::Gauge,
        }
    }

    /// Counter delta, `None` for gauges.
    pub fn delta(&self) -> Option<i64> {
        match *self {
            MetricValue::Counter(d) => Some(d),
            MetricValue::Gauge(_) => None,
        }
    }

    /// Gauge value, `None` for counters.
    pub fn gauge(&self) -> Option<f64> {
        match *self {
            MetricValue::Gauge(v) => Some(v),
            MetricValue::Counter(_) => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Counter(d) => write!(f, "{d}"),
            MetricValue::Gauge(v) => write!(f, "{v}"),
        }
    }
}

/// A single metric sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    name: String,
    value: MetricValue,
}

impl Metric {
    pub fn counter(name: impl Into<String>, delta: i64) -> Self {
        Self {
            name: name.into(),
            value: MetricValue::Counter(delta),
        }
    }

    pub fn gauge(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: MetricValue::Gauge(value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MetricKind {
        self.value.kind()
    }

    pub fn value(&self) -> MetricValue {
        self.value
    }

    pub fn id(&self) -> MetricId {
        MetricId::new(self.name.clone(), self.kind())
    }

    /// Replace the counter delta. The kind is fixed for the metric's lifetime,
    /// so this fails on gauges.
    pub fn with_delta(self, delta: i64) -> Result<Self> {
        match self.value {
            MetricValue::Counter(_) => Ok(Self {
                name: self.name,
                value: MetricValue::Counter(delta),
            }),
            MetricValue::Gauge(_) => Err(MetricaError::Internal(format!(
                "cannot set a delta on gauge {}",
                self.name
            ))),
        }
    }

    /// Build a metric from raw path segments.
    ///
    /// Checks run in a fixed order: empty name (`NotFound`), then a missing
    /// value, unknown kind and unparseable value (all `BadRequest`).
    pub fn from_path_parts(kind: &str, name: &str, value: Option<&str>) -> Result<Self> {
        if name.is_empty() {
            return Err(MetricaError::NotFound("metric name is required".into()));
        }

        let raw = match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                return Err(MetricaError::BadRequest(format!(
                    "metric value is required for {name}"
                )))
            }
        };

        match kind.parse::<MetricKind>()? {
            MetricKind::Counter => {
                let delta = raw.parse::<i64>().map_err(|e| {
                    MetricaError::BadRequest(format!("invalid counter value {raw:?}: {e}"))
                })?;
                Ok(Self::counter(name, delta))
            }
            MetricKind::Gauge => {
                let v = raw.parse::<f64>().map_err(|e| {
                    MetricaError::BadRequest(format!("invalid gauge value {raw:?}: {e}"))
                })?;
                Ok(Self::gauge(name, v))
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}={}", self.kind(), self.name, self.value)
    }
}
