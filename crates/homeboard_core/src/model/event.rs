//! Calendar event domain model.
//!
//! # Responsibility
//! - Define the canonical event record rendered by the calendar view.
//! - Define the closed event type set and the type filter predicate.
//!
//! # Invariants
//! - `id` is assigned once by the store and never reused for another event.
//! - `title` is non-blank after trimming for every stored event.
//! - `time` is free-form display text and is never parsed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier of one calendar event.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EventId = u64;

/// Closed set of event categories shown by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventType {
    /// Appointment with someone (default for new drafts).
    #[default]
    Meeting,
    /// Household chore or errand.
    Task,
    /// Date to remember, typically all-day.
    Reminder,
}

impl EventType {
    /// All variants in display order.
    pub const ALL: [EventType; 3] = [Self::Meeting, Self::Task, Self::Reminder];

    /// Stable display/wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meeting => "Meeting",
            Self::Task => "Task",
            Self::Reminder => "Reminder",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown event type or filter labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEventTypeError(pub String);

impl Display for ParseEventTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported event type `{}`; expected Meeting|Task|Reminder",
            self.0
        )
    }
}

impl Error for ParseEventTypeError {}

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meeting" => Ok(Self::Meeting),
            "task" => Ok(Self::Task),
            "reminder" => Ok(Self::Reminder),
            _ => Err(ParseEventTypeError(s.trim().to_string())),
        }
    }
}

/// Display filter restricting events to one type, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl TypeFilter {
    /// Filter chips in display order.
    pub const ALL_OPTIONS: [TypeFilter; 4] = [
        Self::All,
        Self::Only(EventType::Meeting),
        Self::Only(EventType::Task),
        Self::Only(EventType::Reminder),
    ];

    /// Returns whether `event` passes this filter.
    pub fn matches(self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => event.kind == kind,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(kind) => kind.as_str(),
        }
    }
}

impl From<EventType> for TypeFilter {
    fn from(value: EventType) -> Self {
        Self::Only(value)
    }
}

impl Display for TypeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<EventType>().map(Self::Only)
    }
}

/// Event validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be blank"),
        }
    }
}

impl Error for EventValidationError {}

/// One calendar entry scheduled on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Display text such as `10:00 AM` or `All Day`.
    pub time: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: EventType,
}

impl Event {
    /// Creates an event with a trimmed title.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is blank after trimming.
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        time: impl Into<String>,
        kind: EventType,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id,
            title: normalize_title(title.into())?,
            time: time.into(),
            kind,
        };
        Ok(event)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Trims a title and rejects blank input.
pub fn normalize_title(value: String) -> Result<String, EventValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EventValidationError::EmptyTitle);
    }
    if trimmed.len() == value.len() {
        return Ok(value);
    }
    Ok(trimmed.to_string())
}
