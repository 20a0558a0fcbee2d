//! Fixed mount-time event sets.

use crate::model::date_key::DateKey;
use crate::model::event::{Event, EventId, EventType};
use crate::store::event_store::EventsByDate;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which event set a calendar view is mounted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSet {
    /// Household sample events.
    #[default]
    Sample,
    /// No events.
    Empty,
}

impl SeedSet {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Empty => "empty",
        }
    }

    /// Builds the mapping for this set.
    pub fn events(self) -> EventsByDate {
        match self {
            Self::Sample => sample_events(),
            Self::Empty => EventsByDate::new(),
        }
    }
}

impl Display for SeedSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(Self::Sample),
            "empty" => Ok(Self::Empty),
            other => Err(format!("unsupported seed set `{other}`; expected sample|empty")),
        }
    }
}

/// Sample household events shown on first mount.
pub fn sample_events() -> EventsByDate {
    [
        (
            (2025, 10, 20),
            vec![seed_event(1, "Electrician Visit", "10:00 AM", EventType::Meeting)],
        ),
        (
            (2025, 10, 22),
            vec![
                seed_event(2, "Buy Groceries", "6:00 PM", EventType::Task),
                seed_event(3, "Mom's Birthday", "All Day", EventType::Reminder),
            ],
        ),
    ]
    .into_iter()
    .filter_map(|((year, month_index, day), list)| {
        DateKey::from_ymd(year, month_index, day).map(|date| (date, list))
    })
    .collect()
}

fn seed_event(id: EventId, title: &str, time: &str, kind: EventType) -> Event {
    Event {
        id,
        title: title.to_string(),
        time: time.to_string(),
        kind,
    }
}
