//! Scrape endpoint server.

use std::future::Future;

use tokio::net::TcpListener;

use cassini_core::error::{CassiniError, Result};

use crate::app_state::AppState;
use crate::config::ExporterSection;
use crate::metrics::Metrics;
use crate::router;

/// Bind and serve until `shutdown` resolves.
///
/// Bind and serve failures are returned and also reported on the metrics
/// error sink.
pub async fn serve<F>(cfg: &ExporterSection, metrics: Metrics, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listen = cfg.listen_addr()?;
    let sink = metrics.error_sink().clone();

    let listener = TcpListener::bind(listen).await.map_err(|e| {
        let err = CassiniError::Internal(format!("bind {listen} failed: {e}"));
        sink.report(err.clone());
        err
    })?;

    let app = router::build_router(AppState::new(metrics), &cfg.path);
    tracing::info!(%listen, path = %cfg.path, "cassini exporter listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| {
            let err = CassiniError::Internal(format!("metrics server failed: {e}"));
            sink.report(err.clone());
            err
        })
}
