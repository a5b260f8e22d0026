use cassini_core::{Descriptor, MetricFamily, Sample};

/// Two-phase collector protocol driven by the scrape endpoint.
pub trait Collector: Send + Sync {
    /// Every registered descriptor, exactly once, independent of stored values.
    fn describe(&self) -> Vec<&Descriptor>;

    /// One constant sample per stored cell that resolves to a descriptor.
    fn collect(&self) -> Vec<Sample>;

    /// Describe + collect, grouped into families in describe order.
    fn gather(&self) -> Vec<MetricFamily> {
        let mut samples = self.collect();
        let mut families = Vec::new();
        for desc in self.describe() {
            let (mine, rest): (Vec<Sample>, Vec<Sample>) =
                samples.into_iter().partition(|s| s.name == desc.name);
            samples = rest;
            let Some(kind) = mine.first().map(|s| s.kind) else {
                continue;
            };
            families.push(MetricFamily {
                desc: desc.clone(),
                kind,
                samples: mine,
            });
        }
        families
    }
}
