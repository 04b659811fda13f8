//! Per-key request sequence numbers
//!
//! Every new query for a key takes the next number; a response is current
//! only while its number is still the latest issued for that key.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

/// Monotonic sequence numbers keyed by origin
#[derive(Debug)]
pub struct SequenceTracker<K> {
    latest: Mutex<HashMap<K, u64>>,
}

impl<K> Default for SequenceTracker<K> {
    fn default() -> Self {
        Self {
            latest: Mutex::new(HashMap::new()),
        }
    }
}

impl<K> SequenceTracker<K>
where
    K: Eq + Hash + Copy,
{
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next number for `key`, superseding all earlier ones
    pub fn issue(&self, key: K) -> u64 {
        let mut latest = self.latest.lock();
        let next = latest.get(&key).map_or(1, |n| n + 1);
        latest.insert(key, next);
        next
    }

    /// Whether `seq` is still the newest number issued for `key`
    #[must_use]
    pub fn is_latest(&self, key: K, seq: u64) -> bool {
        self.latest.lock().get(&key).copied() == Some(seq)
    }

    /// The newest number issued for `key`, 0 if none
    #[must_use]
    pub fn latest(&self, key: K) -> u64 {
        self.latest.lock().get(&key).copied().unwrap_or(0)
    }
}
