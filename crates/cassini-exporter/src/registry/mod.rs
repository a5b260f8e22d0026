//! Concurrent metric registry.
//!
//! Entries live in a `DashMap<String, Entry>`; each cell carries its own lock,
//! so there is no registry-wide lock. `collect` snapshots the entry handles and
//! then reads each cell under its own lock: every sample is atomic per key, but
//! a scrape racing with writers may mix before/after states across keys.
//!
//! Faults (type mismatch, missing descriptor, label arity, counter overwrite,
//! negative counter delta) never reach the caller. They are reported on the `ErrorSink` and the
//! operation (or the single sample) is abandoned.

mod collector;
mod entry;

use dashmap::mapref::entry::Entry as Slot;
use dashmap::DashMap;

use cassini_core::{CassiniError, Descriptor, DescriptorTable, MetricKind, MetricValue, Sample};

use crate::error_sink::ErrorSink;

pub use collector::Collector;
pub use entry::Entry;

pub struct MetricRegistry {
    descs: DescriptorTable,
    entries: DashMap<String, Entry>,
    sink: ErrorSink,
}

impl MetricRegistry {
    pub fn new(descs: DescriptorTable, sink: ErrorSink) -> Self {
        Self {
            descs,
            entries: DashMap::new(),
            sink,
        }
    }

    pub fn descriptors(&self) -> &DescriptorTable {
        &self.descs
    }

    pub fn error_sink(&self) -> &ErrorSink {
        &self.sink
    }

    /// Replace the entry for `key` wholesale (last write wins).
    ///
    /// A stored counter is never replaced; counters only move through `count`
    /// and explicit resets. Series must hold cells of one kind.
    pub fn set(&self, key: &str, entry: impl Into<Entry>) {
        let entry = entry.into();
        if entry.uniform_kind().is_none() {
            self.fail(CassiniError::TypeMismatch {
                key: key.to_string(),
                expected: "a series of one metric kind",
            });
            return;
        }

        match self.entries.entry(key.to_string()) {
            Slot::Occupied(mut slot) => {
                if slot.get().is_counter() {
                    drop(slot);
                    self.fail(CassiniError::CounterOverwrite { key: key.to_string() });
                    return;
                }
                slot.insert(entry);
            }
            Slot::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    /// Store several label-bound cells under one key.
    pub fn set_series(&self, key: &str, values: Vec<MetricValue>) {
        self.set(key, Entry::from(values));
    }

    /// Add `delta` to the cell under `key`, creating a counter holding `delta`
    /// if the key is new.
    ///
    /// Creation goes through the shard-locked entry API, so two writers racing
    /// on a fresh key cannot both insert: the loser increments the winner's
    /// cell. Counters only accept finite, non-negative deltas.
    pub fn count(&self, key: &str, delta: f64) {
        let counter_delta_ok = delta.is_finite() && delta >= 0.0;

        let existing = match self.entries.get(key) {
            Some(e) => e.value().clone(),
            None => {
                if !counter_delta_ok {
                    self.fail(CassiniError::NegativeCounterDelta { key: key.to_string() });
                    return;
                }
                match self.entries.entry(key.to_string()) {
                    Slot::Vacant(slot) => {
                        slot.insert(Entry::from(MetricValue::counter(delta)));
                        return;
                    }
                    Slot::Occupied(slot) => slot.get().clone(),
                }
            }
        };

        match existing {
            Entry::Single(m) if m.kind() == MetricKind::Counter && !counter_delta_ok => {
                self.fail(CassiniError::NegativeCounterDelta { key: key.to_string() });
            }
            Entry::Single(m) => m.count(delta),
            Entry::Series(_) => self.fail(CassiniError::TypeMismatch {
                key: key.to_string(),
                expected: "a single metric value",
            }),
        }
    }

    /// Stored entry for `key`.
    pub fn get(&self, key: &str) -> Option<Entry> {
        self.entries.get(key).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Abandon the current operation and report why.
    fn fail(&self, err: CassiniError) {
        tracing::debug!(code = err.code().as_str(), error = %err, "metrics operation abandoned");
        self.sink.report(err);
    }

    fn sample(&self, key: &str, m: &MetricValue) -> Option<Sample> {
        let Some(desc) = self.descs.get(key) else {
            self.fail(CassiniError::MissingDescriptor { key: key.to_string() });
            return None;
        };
        if m.label_values().len() != desc.label_names.len() {
            self.fail(CassiniError::LabelArity {
                key: key.to_string(),
                expected: desc.label_names.len(),
                got: m.label_values().len(),
            });
            return None;
        }
        Some(Sample::new(key, desc, m.kind(), m.value(), m.label_values()))
    }
}

impl Collector for MetricRegistry {
    fn describe(&self) -> Vec<&Descriptor> {
        self.descs.iter().map(|(_, d)| d).collect()
    }

    fn collect(&self) -> Vec<Sample> {
        // Release shard locks before touching cell locks.
        let mut snapshot: Vec<(String, Entry)> = self
            .entries
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        snapshot.sort_by(|a, b| a.0.cmp(&b.0));

        snapshot
            .iter()
            .flat_map(|(key, entry)| {
                entry
                    .values()
                    .iter()
                    .filter_map(move |m| self.sample(key, m))
            })
            .collect()
    }
}

impl std::fmt::Debug for MetricRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricRegistry")
            .field("descriptors", &self.descs.len())
            .field("entries", &self.entries.len())
            .finish()
    }
}

