//! Session-owned event state.
//!
//! # Responsibility
//! - Hold the date -> events mapping and id allocation for one view session.
//! - Keep mutation rules (pruning, ordering, id uniqueness) in one place.
//!
//! # Invariants
//! - The store is transient and process-local; nothing is persisted.
//! - Mutations run synchronously on the caller's thread.

pub mod event_store;
pub mod id_alloc;
