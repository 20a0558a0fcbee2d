//! Monotonic event id allocation.

use crate::model::event::EventId;

/// Hands out event ids that are never reused within one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: EventId,
}

impl IdAllocator {
    /// Creates an allocator whose first id is `first`.
    ///
    /// Id `0` is never issued.
    pub fn starting_at(first: EventId) -> Self {
        Self {
            next: first.max(1),
        }
    }

    /// Returns a fresh id and advances the counter.
    pub fn allocate(&mut self) -> EventId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// Records an externally supplied id so later allocations skip it.
    pub fn observe(&mut self, id: EventId) {
        if id >= self.next {
            self.next = id.saturating_add(1);
        }
    }

    /// Id the next `allocate` call will return.
    pub fn peek(&self) -> EventId {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
