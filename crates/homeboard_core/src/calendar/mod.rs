//! Pure calendar arithmetic for the month view.
//!
//! # Responsibility
//! - Derive grid layout from (year, month index).
//! - Keep date math free of store and session state.

pub mod grid;
