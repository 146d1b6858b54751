//! Bounded FIFO set of already-posted article identifiers.
//!
//! The ledger is the only state the bot keeps between news cycles. It exists
//! purely for duplicate suppression: an article whose identifier is in the
//! ledger has already been posted and must not be posted again. The ledger
//! lives for the process lifetime only; a restart forgets all history and may
//! re-post recently-seen articles.

use std::collections::{HashSet, VecDeque};

/// Insertion-ordered set of seen article identifiers with a fixed capacity.
///
/// Eviction is strict FIFO: when an insert pushes the set past capacity, the
/// single oldest-inserted surviving identifier is removed. Lookups never
/// refresh recency, so this is deliberately not an LRU.
///
/// Not internally synchronized; the bot serializes access through a single
/// mutex owned by the event handler.
pub struct SeenLedger {
    capacity: usize,
    order: VecDeque<String>,
    seen: HashSet<String>,
}

impl SeenLedger {
    /// Creates an empty ledger. Capacity is fixed for the ledger's lifetime.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Returns true iff `id` was previously inserted and not yet evicted.
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Inserts `id` if absent, evicting the oldest identifier when the set
    /// would exceed capacity. Returns whether `id` was newly inserted.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }

        let id = id.to_string();
        self.order.push_back(id.clone());
        self.seen.insert(id);

        if self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }

        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
