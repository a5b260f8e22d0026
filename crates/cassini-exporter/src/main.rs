//! cassini exporter binary.
//!
//! - Loads `cassini.yaml` (or the path given as first argument); defaults if absent
//! - Serves the scrape endpoint (default `0.0.0.0:39099/metrics`)
//! - Runs the txs-per-second decay loop and the error-sink logger
//! - Ctrl-C: stop serving, stop and join the decay loop

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use cassini_core::Result;
use cassini_exporter::{config, global, server, spawn_error_logger, ErrorSink, Metrics};

const DEFAULT_CONFIG_PATH: &str = "cassini.yaml";

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler failed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;

    let (sink, rx) = ErrorSink::channel(cfg.errors.sink_capacity);
    let metrics = Metrics::new(sink);
    global::install(metrics.clone())?;

    let logger = spawn_error_logger(rx, Arc::clone(metrics.registry()));
    let decay = metrics.spawn_decay(cfg.decay.interval());

    let served = server::serve(&cfg.exporter, metrics.clone(), shutdown_signal()).await;

    decay.shutdown().await;
    // the global handle keeps the sink open, so the logger never drains to end
    logger.abort();

    if let Err(e) = &served {
        tracing::error!(error = %e, "exporter stopped with error");
    }
    served
}
