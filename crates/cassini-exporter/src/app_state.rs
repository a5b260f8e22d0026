//! Shared state for the scrape endpoint.

use crate::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    metrics: Metrics,
}

impl AppState {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
