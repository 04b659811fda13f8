//! Keyed debounce timers
//!
//! Each key owns at most one pending timer. Scheduling a new timer for a key
//! cancels the one already pending for it; other keys are unaffected.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;

/// Per-key cancel-then-schedule debouncer
#[derive(Debug)]
pub struct Debouncer<K> {
    delay: Duration,
    pending: Mutex<HashMap<K, Pending>>,
    next_ticket: AtomicU64,
}

#[derive(Debug)]
struct Pending {
    ticket: u64,
    cancel: oneshot::Sender<()>,
}

impl<K> Debouncer<K>
where
    K: Eq + Hash + Copy,
{
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(HashMap::new()),
            next_ticket: AtomicU64::new(0),
        }
    }

    /// The quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the quiet period to elapse for `key`
    ///
    /// Returns `true` when the period elapsed without another `settle` or
    /// `cancel` for the same key, `false` when this timer was cancelled.
    pub async fn settle(&self, key: K) -> bool {
        let (cancel, cancelled) = oneshot::channel();
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        {
            let mut pending = self.pending.lock();
            if let Some(previous) = pending.insert(key, Pending { ticket, cancel }) {
                // The receiver may already be gone if that caller was dropped.
                let _ = previous.cancel.send(());
            }
        }

        tokio::select! {
            () = tokio::time::sleep(self.delay) => {
                let mut pending = self.pending.lock();
                if pending.get(&key).is_some_and(|p| p.ticket == ticket) {
                    pending.remove(&key);
                    true
                } else {
                    false
                }
            },
            _ = cancelled => false,
        }
    }

    /// Cancel the pending timer for `key`, if any
    ///
    /// Returns whether a timer was pending.
    pub fn cancel(&self, key: K) -> bool {
        let previous = self.pending.lock().remove(&key);
        previous.map(|p| p.cancel.send(())).is_some()
    }

    /// Whether a timer is pending for `key`
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.pending.lock().contains_key(&key)
    }
}
