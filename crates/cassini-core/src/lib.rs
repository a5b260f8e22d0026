//! cassini core: runtime-free metric primitives, descriptors, and the text
//! exposition encoder.
//!
//! This crate carries no async runtime or transport dependencies. The exporter
//! crate builds the concurrent registry, background tasks and scrape endpoint
//! on top of it.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. Metric writers must
//! never crash the host process, so every fallible path surfaces as
//! `CassiniError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;
pub mod metric;

pub use error::{CassiniError, ErrorCode, Result};
pub use metric::{Descriptor, DescriptorTable, MetricFamily, MetricKind, MetricValue, Sample};
