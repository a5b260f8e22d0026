//! Out-of-band error sink for registry faults.
//!
//! Writers only ever `try_send`: when the consumer falls behind (queue full) or
//! is gone, the error is dropped and counted so a metric writer never blocks
//! on diagnostics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use cassini_core::metric::catalog;
use cassini_core::CassiniError;

use crate::registry::MetricRegistry;

#[derive(Clone)]
pub struct ErrorSink {
    tx: Option<mpsc::Sender<CassiniError>>,
    dropped: Arc<AtomicU64>,
}

impl ErrorSink {
    /// Bounded sink plus the receiver its owner must drain.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<CassiniError>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            Self {
                tx: Some(tx),
                dropped: Arc::new(AtomicU64::new(0)),
            },
            rx,
        )
    }

    /// Sink with no consumer: every report is logged and counted as dropped.
    pub fn detached() -> Self {
        Self {
            tx: None,
            dropped: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Non-blocking report.
    pub fn report(&self, err: CassiniError) {
        let Some(tx) = &self.tx else {
            self.drop_error(err, "detached");
            return;
        };
        match tx.try_send(err) {
            Ok(()) => {}
            Err(TrySendError::Full(err)) => self.drop_error(err, "full"),
            Err(TrySendError::Closed(err)) => self.drop_error(err, "closed"),
        }
    }

    fn drop_error(&self, err: CassiniError, reason: &'static str) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(code = err.code().as_str(), reason, error = %err, "error sink dropped report");
    }

    /// Number of reports dropped so far.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Default consumer: log every error and count it into `cassini_errors`.
pub fn spawn_error_logger(
    mut rx: mpsc::Receiver<CassiniError>,
    registry: Arc<MetricRegistry>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(err) = rx.recv().await {
            tracing::error!(code = err.code().as_str(), error = %err, "metrics fault");
            // a fault on the errors entry itself must not feed back into the sink
            if err.key() != Some(catalog::ERRORS) {
                registry.count(catalog::ERRORS, 1.0);
            }
        }
        tracing::debug!("error sink closed");
    })
}
