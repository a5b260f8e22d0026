use super::{Descriptor, MetricKind};

/// Constant snapshot of one series, taken during a collect pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Registry key the value was stored under.
    pub key: String,
    /// Exposed metric name, from the descriptor.
    pub name: String,
    pub kind: MetricKind,
    pub value: f64,
    /// `(label name, label value)` pairs in descriptor order.
    pub labels: Vec<(String, String)>,
}

impl Sample {
    /// Pair a cell's label values with its descriptor's label names.
    pub fn new(key: &str, desc: &Descriptor, kind: MetricKind, value: f64, label_values: &[String]) -> Self {
        Self {
            key: key.to_string(),
            name: desc.name.clone(),
            kind,
            value,
            labels: desc
                .label_names
                .iter()
                .cloned()
                .zip(label_values.iter().cloned())
                .collect(),
        }
    }
}

/// All samples sharing one descriptor, ready for encoding.
#[derive(Debug, Clone)]
pub struct MetricFamily {
    pub desc: Descriptor,
    pub kind: MetricKind,
    pub samples: Vec<Sample>,
}
