//! Metric primitives.
//!
//! - `MetricValue`: a lock-guarded numeric cell (gauge or counter).
//! - `Descriptor` / `DescriptorTable`: immutable metadata, built once.
//! - `Sample` / `MetricFamily`: constant snapshots emitted by a collect pass.

pub mod catalog;
mod descriptor;
mod sample;
mod value;

pub use descriptor::{Descriptor, DescriptorTable};
pub use sample::{MetricFamily, Sample};
pub use value::{MetricKind, MetricValue};
