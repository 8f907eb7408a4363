//! Shared event counters.
//!
//! [`Metrics`] maps event names to monotonically increasing counts. Owners
//! share one instance through an `Arc`; every increment performs its
//! read-check-increment sequence under a single mutex so concurrent callers
//! never lose updates.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Named counters guarded by one mutex.
///
/// # Example
///
/// ```
/// use sluice_plugins::Metrics;
///
/// let metrics = Metrics::new();
/// metrics.inc("hello");
/// metrics.inc("hello");
/// assert_eq!(metrics.count("hello"), 2);
/// assert_eq!(metrics.count("unseen"), 0);
/// ```
#[derive(Debug, Default)]
pub struct Metrics {
    counts: Mutex<HashMap<String, u64>>,
}

impl Metrics {
    /// Creates an empty counter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter for `name`, creating it at zero first if absent.
    pub fn inc(&self, name: &str) {
        let mut counts = self.lock();
        match counts.get_mut(name) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                counts.insert(name.to_owned(), 1);
            }
        }
    }

    /// Returns the current count for `name`.
    #[must_use]
    pub fn count(&self, name: &str) -> u64 {
        self.lock().get(name).copied().unwrap_or_default()
    }

    /// Returns every counter, ordered by name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.lock()
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect()
    }

    // Poisoning cannot leave the map inconsistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
