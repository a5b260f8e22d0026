//! Exposition formats.
//!
//! Only the Prometheus text format (version 0.0.4) is implemented. Families
//! are rendered in the order given; samples keep their collect order.

pub mod text;

pub use text::{encode, CONTENT_TYPE};
