//! Rate decay loop.
//!
//! Resets one designated cell every `period`, turning a monotonically counted
//! value into an approximate count-per-period. The first reset happens one
//! full period after spawn.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior};

use cassini_core::MetricValue;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Shortest accepted period; zero would make the interval panic.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running decay task. Dropping it without `shutdown` also stops
/// the task (the signal channel closes) but does not wait for it.
pub struct RateDecayLoop {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RateDecayLoop {
    /// Spawn onto the current tokio runtime. `period` is clamped to
    /// `MIN_PERIOD`.
    pub fn spawn(cell: Arc<MetricValue>, period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut tick = tokio::time::interval_at(Instant::now() + period, period);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tracing::info!(period_ms = period.as_millis() as u64, "rate decay loop started");

            loop {
                tokio::select! {
                    _ = tick.tick() => cell.reset(),
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            tracing::debug!("rate decay loop stopped");
        });

        Self { stop_tx, handle }
    }

    /// Signal the task and wait for it to exit.
    pub async fn shutdown(self) {
        let _ = self.stop_tx.send(true);
        if let Err(e) = self.handle.await {
            tracing::warn!(error = %e, "rate decay task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
