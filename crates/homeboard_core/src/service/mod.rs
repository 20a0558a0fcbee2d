//! Calendar use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into view-level and drawer-level APIs.
//! - Keep transient UI session state apart from domain state.

pub mod calendar_view;
pub mod event_form;
