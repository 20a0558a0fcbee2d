//! Calendar domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by the event store and views.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - Every event belongs to exactly one `DateKey` at a time.

pub mod date_key;
pub mod event;
