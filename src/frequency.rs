//! Concurrency-safe frequency counting of resource references.

use std::collections::HashMap;
use std::sync::Mutex;

/// Frequency table mapping a resource reference to how often it was seen.
///
/// One table is created per search call, shared by all fan-out tasks of
/// that call and discarded after the report is ranked. Keys are literal:
/// two textually different references to the same library are counted
/// separately.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: Mutex<HashMap<String, usize>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `resource`: insert with count 1 if absent,
    /// otherwise add one. The lock covers only the map update, so
    /// concurrent increments on the same key are never lost.
    pub fn increment(&self, resource: &str) {
        let mut counts = self.counts.lock().unwrap();
        *counts.entry(resource.to_string()).or_insert(0) += 1;
    }

    /// Number of distinct resources seen.
    pub fn len(&self) -> usize {
        self.counts.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all (resource, count) pairs, in no particular order.
    pub fn counts(&self) -> Vec<(String, usize)> {
        self.counts
            .lock()
            .unwrap()
            .iter()
            .map(|(resource, count)| (resource.clone(), *count))
            .collect()
    }

    /// Count recorded for a single resource, if any.
    pub fn count(&self, resource: &str) -> Option<usize> {
        self.counts.lock().unwrap().get(resource).copied()
    }
}
