//! Rate decay loop timing, on tokio's paused clock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tokio::time::{sleep, Duration};

use cassini_core::metric::catalog;
use cassini_exporter::{ErrorSink, Metrics};

fn rate(metrics: &Metrics) -> f64 {
    metrics
        .collect()
        .into_iter()
        .find(|s| s.key == catalog::TXS_PER_SECOND)
        .map(|s| s.value)
        .expect("rate sample")
}

#[tokio::test(start_paused = true)]
async fn tick_resets_the_rate_cell() {
    let metrics = Metrics::new(ErrorSink::detached());
    let decay = metrics.spawn_decay(Duration::from_secs(1));

    metrics.tx_count(5.0);
    sleep(Duration::from_millis(1100)).await;
    metrics.tx_count(3.0);

    assert_eq!(rate(&metrics), 3.0);
    assert!(!decay.is_finished());
    decay.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn counts_accumulate_within_one_interval() {
    let metrics = Metrics::new(ErrorSink::detached());
    let decay = metrics.spawn_decay(Duration::from_secs(1));

    metrics.tx_count(5.0);
    sleep(Duration::from_millis(400)).await;
    metrics.tx_count(3.0);

    assert_eq!(rate(&metrics), 8.0);
    decay.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_joins_and_stops_resetting() {
    let metrics = Metrics::new(ErrorSink::detached());
    let decay = metrics.spawn_decay(Duration::from_secs(1));
    decay.shutdown().await;

    metrics.tx_count(4.0);
    sleep(Duration::from_secs(5)).await;
    assert_eq!(rate(&metrics), 4.0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_the_task() {
    let metrics = Metrics::new(ErrorSink::detached());
    drop(metrics.spawn_decay(Duration::from_secs(1)));
    // let the task observe the closed signal
    sleep(Duration::from_millis(10)).await;

    metrics.tx_count(2.0);
    sleep(Duration::from_secs(3)).await;
    assert_eq!(rate(&metrics), 2.0);
}

#[tokio::test(start_paused = true)]
async fn zero_period_is_clamped_instead_of_panicking() {
    let metrics = Metrics::new(ErrorSink::detached());
    let decay = metrics.spawn_decay(Duration::ZERO);

    metrics.tx_count(5.0);
    sleep(Duration::from_millis(10)).await;
    assert_eq!(rate(&metrics), 0.0);
    assert!(!decay.is_finished());
    decay.shutdown().await;
}
