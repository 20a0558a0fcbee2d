//! Core domain logic for the Homeboard household calendar.
//! This crate is the single source of truth for calendar invariants.

pub mod calendar;
pub mod config;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use calendar::grid::{GridCell, GridError, MonthCursor, MonthGrid, WEEKDAY_LABELS};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::date_key::{DateKey, DateKeyError};
pub use model::event::{
    Event, EventId, EventType, EventValidationError, ParseEventTypeError, TypeFilter,
};
pub use seed::{sample_events, SeedSet};
pub use service::calendar_view::{CalendarView, DayCell, EventDot, ViewError, MAX_DAY_DOTS};
pub use service::event_form::{EventDraft, EventForm, FormError, FormMode};
pub use store::event_store::{
    EventStore, EventsByDate, StoreChange, StoreError, StoreResult, SubscriptionId,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
