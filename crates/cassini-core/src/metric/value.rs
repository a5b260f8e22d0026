use std::sync::{PoisonError, RwLock};

/// Exposition kind of a metric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Set directly, may move up or down.
    Gauge,
    /// Only increases, except through an explicit reset.
    Counter,
}

impl MetricKind {
    /// Name used in `# TYPE` lines.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

/// Thread-safe numeric cell with optional ordered label values.
///
/// Label values are parallel to the label names of the descriptor the cell is
/// stored under. Reads take the shared lock, writes the exclusive one; a
/// poisoned lock is recovered since a plain `f64` cannot be left half-written.
#[derive(Debug)]
pub struct MetricValue {
    value: RwLock<f64>,
    kind: MetricKind,
    label_values: Vec<String>,
}

impl MetricValue {
    pub fn new(kind: MetricKind, value: f64, label_values: Vec<String>) -> Self {
        Self {
            value: RwLock::new(value),
            kind,
            label_values,
        }
    }

    pub fn gauge<I, S>(value: f64, label_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            MetricKind::Gauge,
            value,
            label_values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn counter(value: f64) -> Self {
        Self::new(MetricKind::Counter, value, Vec::new())
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn label_values(&self) -> &[String] {
        &self.label_values
    }

    /// Consistent read under the shared lock.
    pub fn value(&self) -> f64 {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite the value.
    pub fn set(&self, v: f64) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = v;
    }

    /// Add `delta` to the value.
    pub fn count(&self, delta: f64) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) += delta;
    }

    /// Reset to zero. The only sanctioned non-monotonic write for counters.
    pub fn reset(&self) {
        self.set(0.0);
    }
}
