//! MetricValue and DescriptorTable behaviour.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use cassini_core::metric::catalog;
use cassini_core::{Descriptor, DescriptorTable, MetricKind, MetricValue};

#[test]
fn set_overwrites_and_count_adds() {
    let m = MetricValue::gauge(1.5, ["mempool"]);
    m.set(4.0);
    m.count(2.5);
    assert_eq!(m.value(), 6.5);
    assert_eq!(m.kind(), MetricKind::Gauge);
    assert_eq!(m.label_values(), ["mempool".to_string()]);
}

#[test]
fn reset_zeroes_counter() {
    let m = MetricValue::counter(7.0);
    m.reset();
    assert_eq!(m.value(), 0.0);
    assert_eq!(m.kind(), MetricKind::Counter);
    assert!(m.label_values().is_empty());
}

#[test]
fn concurrent_count_loses_nothing() {
    let m = Arc::new(MetricValue::counter(0.0));
    std::thread::scope(|s| {
        for _ in 0..8 {
            let m = Arc::clone(&m);
            s.spawn(move || {
                for _ in 0..1000 {
                    m.count(1.0);
                }
            });
        }
    });
    assert_eq!(m.value(), 8000.0);
}

#[test]
fn duplicate_descriptor_keys_rejected() {
    let err = DescriptorTable::new([
        ("a", Descriptor::new("x_a", "a", &[])),
        ("a", Descriptor::new("x_a2", "a", &[])),
    ])
    .unwrap_err();
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn descriptor_table_keeps_insertion_order() {
    let table = DescriptorTable::new([
        ("b", Descriptor::new("x_b", "b", &[])),
        ("a", Descriptor::new("x_a", "a", &["node"])),
    ])
    .unwrap();
    let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["b", "a"]);
    assert!(table.get("c").is_none());
}

#[test]
fn catalog_names_are_prefixed() {
    let table = DescriptorTable::catalog();
    assert_eq!(table.len(), 7);
    for (key, d) in table.iter() {
        assert_eq!(d.name, format!("cassini_{key}"));
    }
    assert_eq!(table.get(catalog::QUEUE_SIZE).unwrap().label_names, ["type"]);
    assert_eq!(table.get(catalog::ADAPTORS).unwrap().label_names, ["node"]);
    assert!(table.get(catalog::QUEUE).unwrap().label_names.is_empty());
}
