//! Process-wide free-function facade.
//!
//! Call sites that cannot be handed a `Metrics` clone use these functions
//! after the composition root has called `install`. Before that they are
//! no-ops.

use std::sync::OnceLock;

use cassini_core::{CassiniError, Result};

use crate::metrics::Metrics;

static GLOBAL: OnceLock<Metrics> = OnceLock::new();

/// Install the process-wide handle. Only the first call succeeds.
pub fn install(metrics: Metrics) -> Result<()> {
    GLOBAL
        .set(metrics)
        .map_err(|_| CassiniError::Internal("global metrics already installed".into()))
}

/// The installed handle, if any.
pub fn get() -> Option<&'static Metrics> {
    GLOBAL.get()
}

fn with(op: &'static str, f: impl FnOnce(&Metrics)) {
    match GLOBAL.get() {
        Some(m) => f(m),
        None => tracing::trace!(op, "global metrics not installed"),
    }
}

pub fn set_gauge(key: &str, value: f64, label_values: &[&str]) {
    with("set_gauge", |m| m.set_gauge(key, value, label_values));
}

pub fn set(key: &str, entry: impl Into<crate::registry::Entry>) {
    with("set", |m| m.set(key, entry));
}

pub fn count(key: &str, delta: f64) {
    with("count", |m| m.count(key, delta));
}

pub fn tx_count(delta: f64) {
    with("tx_count", |m| m.tx_count(delta));
}
