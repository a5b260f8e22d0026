//! `Metrics`: the registry handle owned by the composition root.
//!
//! Cheap to clone; every clone writes to the same registry. Construction seeds
//! the built-in gauges, the shared rate cell and the errors counter.

use std::sync::Arc;

use tokio::time::Duration;

use cassini_core::exposition;
use cassini_core::metric::catalog;
use cassini_core::{Descriptor, DescriptorTable, MetricFamily, MetricKind, MetricValue, Sample};

use crate::decay::RateDecayLoop;
use crate::error_sink::ErrorSink;
use crate::registry::{Collector, Entry, MetricRegistry};

#[derive(Clone)]
pub struct Metrics {
    registry: Arc<MetricRegistry>,
    rate: Arc<MetricValue>,
}

impl Metrics {
    pub fn new(sink: ErrorSink) -> Self {
        let registry = Arc::new(MetricRegistry::new(DescriptorTable::catalog(), sink));
        // exposed as a gauge: the decay loop resets it every period
        let rate = Arc::new(MetricValue::new(MetricKind::Gauge, 0.0, Vec::new()));

        let metrics = Self { registry, rate };
        metrics.set_gauge(catalog::QUEUE, 0.0, &[]);
        metrics.set_gauge(catalog::TXS_WAIT, 0.0, &[]);
        metrics.set_gauge(catalog::TX_COST, 0.0, &[]);
        metrics.set(catalog::TXS_PER_SECOND, Arc::clone(&metrics.rate));
        metrics.count(catalog::ERRORS, 0.0);
        metrics
    }

    pub fn registry(&self) -> &Arc<MetricRegistry> {
        &self.registry
    }

    pub fn error_sink(&self) -> &ErrorSink {
        self.registry.error_sink()
    }

    /// Replace the entry for `key`.
    pub fn set(&self, key: &str, entry: impl Into<Entry>) {
        self.registry.set(key, entry);
    }

    /// Store a fresh gauge holding `value`.
    pub fn set_gauge(&self, key: &str, value: f64, label_values: &[&str]) {
        self.registry
            .set(key, MetricValue::gauge(value, label_values.iter().copied()));
    }

    /// Store one gauge per label value combination under `key`.
    pub fn set_gauge_series<I, L, S>(&self, key: &str, series: I)
    where
        I: IntoIterator<Item = (f64, L)>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = series
            .into_iter()
            .map(|(v, labels)| MetricValue::gauge(v, labels))
            .collect();
        self.registry.set_series(key, values);
    }

    pub fn count(&self, key: &str, delta: f64) {
        self.registry.count(key, delta);
    }

    /// Count relayed transactions into the per-second rate cell.
    pub fn tx_count(&self, delta: f64) {
        self.rate.count(delta);
    }

    /// Start resetting the rate cell every `period`.
    pub fn spawn_decay(&self, period: Duration) -> RateDecayLoop {
        RateDecayLoop::spawn(Arc::clone(&self.rate), period)
    }

    pub fn describe(&self) -> Vec<&Descriptor> {
        self.registry.describe()
    }

    pub fn collect(&self) -> Vec<Sample> {
        self.registry.collect()
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// One describe + collect pass rendered as text exposition.
    pub fn render(&self) -> String {
        exposition::encode(&self.gather())
    }
}
