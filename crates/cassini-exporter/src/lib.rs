//! cassini exporter library entry.
//!
//! Wires the concurrent metric registry, the bounded error sink, the rate
//! decay loop and the HTTP scrape endpoint into one runtime. Consumed by the
//! binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod decay;
pub mod error_sink;
pub mod global;
pub mod metrics;
pub mod ops;
pub mod registry;
pub mod router;
pub mod server;

pub use decay::RateDecayLoop;
pub use error_sink::{spawn_error_logger, ErrorSink};
pub use metrics::Metrics;
pub use registry::{Collector, Entry, MetricRegistry};
