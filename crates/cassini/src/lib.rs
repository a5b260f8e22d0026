//! Top-level facade crate for cassini metrics.
//!
//! Re-exports the core primitives and the exporter runtime so applications can
//! depend on a single crate.

pub mod core {
    pub use cassini_core::*;
}

pub mod exporter {
    pub use cassini_exporter::*;
}
