use std::collections::HashMap;

use crate::error::{CassiniError, Result};

/// Immutable metadata for one metric series family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    pub help: String,
    pub label_names: Vec<String>,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, help: impl Into<String>, label_names: &[&str]) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            label_names: label_names.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Fixed key -> descriptor mapping, built once at startup.
///
/// Insertion order is kept so `describe` output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct DescriptorTable {
    order: Vec<String>,
    by_key: HashMap<String, Descriptor>,
}

impl DescriptorTable {
    /// Build a table from `(key, descriptor)` pairs. Duplicate keys are rejected.
    pub fn new<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Descriptor)>,
        K: Into<String>,
    {
        let mut table = Self::default();
        for (key, desc) in entries {
            let key = key.into();
            if table.by_key.contains_key(&key) {
                return Err(CassiniError::BadConfig(format!("duplicate descriptor key: {key}")));
            }
            table.insert(key, desc);
        }
        Ok(table)
    }

    pub(crate) fn insert(&mut self, key: String, desc: Descriptor) {
        if self.by_key.insert(key.clone(), desc).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Descriptor> {
        self.by_key.get(key)
    }

    /// Iterate `(key, descriptor)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
        self.order
            .iter()
            .filter_map(|k| self.by_key.get(k).map(|d| (k.as_str(), d)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
