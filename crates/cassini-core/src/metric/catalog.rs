//! Built-in `cassini_` metric catalog.

use super::{Descriptor, DescriptorTable};

pub const KEY_PREFIX: &str = "cassini_";

pub const QUEUE_SIZE: &str = "queue_size";
pub const QUEUE: &str = "queue";
pub const ADAPTORS: &str = "adaptors";
pub const TXS_WAIT: &str = "txs_wait";
pub const TX_COST: &str = "tx_cost";
pub const TXS_PER_SECOND: &str = "txs_per_second";
pub const ERRORS: &str = "errors";

fn desc(key: &'static str, help: &str, label_names: &[&str]) -> (&'static str, Descriptor) {
    (key, Descriptor::new(format!("{KEY_PREFIX}{key}"), help, label_names))
}

/// The seven descriptors the exporter registers at startup.
pub fn descriptors() -> Vec<(&'static str, Descriptor)> {
    vec![
        desc(QUEUE_SIZE, "Size of queue", &["type"]),
        desc(QUEUE, "Current size of tx in queue", &[]),
        desc(TXS_PER_SECOND, "Number of relayed tx per second", &[]),
        desc(TXS_WAIT, "Number of tx waiting to be relayed", &[]),
        desc(TX_COST, "Time(milliseconds) cost of lastest tx relay", &[]),
        desc(ADAPTORS, "Number of available adaptors", &["node"]),
        desc(ERRORS, "Count of running errors", &[]),
    ]
}

impl DescriptorTable {
    /// Table holding the built-in catalog.
    pub fn catalog() -> Self {
        let mut table = Self::default();
        for (key, d) in descriptors() {
            table.insert(key.to_string(), d);
        }
        table
    }
}
