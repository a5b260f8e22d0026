//! Error sink: non-blocking delivery and the default logger.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use tokio::time::{sleep, Duration};

use cassini_core::metric::catalog;
use cassini_core::CassiniError;
use cassini_exporter::{spawn_error_logger, ErrorSink, Metrics};

fn fault(key: &str) -> CassiniError {
    CassiniError::MissingDescriptor { key: key.into() }
}

#[test]
fn full_sink_drops_and_counts_without_blocking() {
    let (sink, mut rx) = ErrorSink::channel(1);
    sink.report(fault("a"));
    sink.report(fault("b"));
    sink.report(fault("c"));

    assert_eq!(sink.dropped(), 2);
    assert_eq!(rx.try_recv().unwrap(), fault("a"));
    assert!(rx.try_recv().is_err());
}

#[test]
fn closed_and_detached_sinks_count_drops() {
    let (sink, rx) = ErrorSink::channel(4);
    drop(rx);
    sink.report(fault("a"));
    assert_eq!(sink.dropped(), 1);

    let detached = ErrorSink::detached();
    detached.report(fault("b"));
    detached.report(fault("c"));
    assert_eq!(detached.dropped(), 2);
}

#[test]
fn writers_never_stall_on_unread_sink() {
    let (sink, _rx) = ErrorSink::channel(2);
    let metrics = Metrics::new(sink);
    for _ in 0..1000 {
        metrics.count("bogus", 1.0);
        metrics.collect();
    }
    assert_eq!(metrics.error_sink().dropped(), 998);
}

#[tokio::test]
async fn logger_counts_faults_into_errors_metric() {
    let (sink, rx) = ErrorSink::channel(16);
    let metrics = Metrics::new(sink);
    let logger = spawn_error_logger(rx, Arc::clone(metrics.registry()));

    metrics.count("bogus", 1.0);
    metrics.collect();
    metrics.collect();

    let errors = || {
        metrics
            .collect()
            .into_iter()
            .find(|s| s.key == catalog::ERRORS)
            .map(|s| s.value)
    };

    // each collect above and in the closure reports one more fault
    let mut seen = 0.0;
    for _ in 0..200 {
        seen = errors().unwrap_or_default();
        if seen >= 2.0 {
            break;
        }
        sleep(Duration::from_millis(5)).await;
    }
    assert!(seen >= 2.0, "errors={seen}");
    logger.abort();
}
