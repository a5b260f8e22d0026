use std::slice;
use std::sync::Arc;

use cassini_core::{MetricKind, MetricValue};

/// One registry slot: a single cell, or several label-bound cells sharing one
/// descriptor (e.g. one gauge per node).
#[derive(Debug, Clone)]
pub enum Entry {
    Single(Arc<MetricValue>),
    Series(Vec<Arc<MetricValue>>),
}

impl Entry {
    /// All cells held by this entry.
    pub fn values(&self) -> &[Arc<MetricValue>] {
        match self {
            Entry::Single(m) => slice::from_ref(m),
            Entry::Series(ms) => ms,
        }
    }

    /// Holds at least one cell, all of them counters.
    pub(crate) fn is_counter(&self) -> bool {
        !self.values().is_empty() && self.uniform_kind() == Some(MetricKind::Counter)
    }

    /// Kind shared by every cell, or `None` for a mixed series.
    pub(crate) fn uniform_kind(&self) -> Option<MetricKind> {
        let mut kinds = self.values().iter().map(|m| m.kind());
        let first = kinds.next().unwrap_or(MetricKind::Gauge);
        kinds.all(|k| k == first).then_some(first)
    }
}

impl From<MetricValue> for Entry {
    fn from(m: MetricValue) -> Self {
        Entry::Single(Arc::new(m))
    }
}

impl From<Arc<MetricValue>> for Entry {
    fn from(m: Arc<MetricValue>) -> Self {
        Entry::Single(m)
    }
}

impl From<Vec<MetricValue>> for Entry {
    fn from(ms: Vec<MetricValue>) -> Self {
        Entry::Series(ms.into_iter().map(Arc::new).collect())
    }
}
