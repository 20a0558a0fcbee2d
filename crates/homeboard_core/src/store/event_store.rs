//! In-memory event store keyed by calendar date.
//!
//! # Responsibility
//! - Own the date -> events mapping for one calendar view session.
//! - Provide add/update/delete/query entry points with validation.
//! - Notify subscribers after every successful mutation.
//!
//! # Invariants
//! - No date key maps to an empty list; emptied keys are pruned.
//! - Every event id appears under exactly one date key.
//! - Newest-added (or newest-moved-in) event is first within a date.
//! - Ids are never reused, including after deletion.

use crate::calendar::grid::MonthCursor;
use crate::model::date_key::DateKey;
use crate::model::event::{
    normalize_title, Event, EventId, EventType, EventValidationError, TypeFilter,
};
use crate::store::id_alloc::IdAllocator;
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Date-grouped event lists, iterated in calendar order.
pub type EventsByDate = BTreeMap<DateKey, Vec<Event>>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Event store errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input rejected before any mutation.
    Validation(EventValidationError),
    /// Seed data contains the same id twice.
    DuplicateSeedId(EventId),
    /// Seed data maps a date to an empty list.
    EmptySeedDate(DateKey),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateSeedId(id) => write!(f, "seed contains duplicate event id: {id}"),
            Self::EmptySeedDate(date) => write!(f, "seed maps {date} to an empty event list"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateSeedId(_) | Self::EmptySeedDate(_) => None,
        }
    }
}

impl From<EventValidationError> for StoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Mutation notice delivered to subscribers after the mapping changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Added { id: EventId, date: DateKey },
    /// `from == to` for in-place edits.
    Updated {
        id: EventId,
        from: DateKey,
        to: DateKey,
    },
    Deleted { id: EventId, date: DateKey },
}

/// Handle returned by [`EventStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StoreChange)>;

/// Single-owner event store for one calendar session.
pub struct EventStore {
    events: EventsByDate,
    ids: IdAllocator,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            events: EventsByDate::new(),
            ids: IdAllocator::default(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a store from seed data.
    ///
    /// Seeded titles are trimmed. Id allocation continues after the largest
    /// seeded id.
    ///
    /// # Errors
    /// - `Validation` when a seeded title is blank.
    /// - `DuplicateSeedId` when an id appears twice anywhere in the seed.
    /// - `EmptySeedDate` when a date maps to no events.
    pub fn with_seed(mut seed: EventsByDate) -> StoreResult<Self> {
        let mut ids = IdAllocator::default();
        let mut seen = HashSet::new();
        for (date, list) in seed.iter_mut() {
            if list.is_empty() {
                return Err(StoreError::EmptySeedDate(*date));
            }
            for event in list.iter_mut() {
                event.title = normalize_title(std::mem::take(&mut event.title))?;
                if !seen.insert(event.id) {
                    return Err(StoreError::DuplicateSeedId(event.id));
                }
                ids.observe(event.id);
            }
        }

        info!(
            "event=store_seed module=store status=ok dates={} events={}",
            seed.len(),
            seen.len()
        );
        Ok(Self {
            events: seed,
            ids,
            ..Self::new()
        })
    }

    /// Adds a new event at the front of `date`'s list.
    ///
    /// # Errors
    /// - `Validation(EmptyTitle)` when `title` is blank; the store is untouched.
    pub fn add_event(
        &mut self,
        date: DateKey,
        title: impl Into<String>,
        time: impl Into<String>,
        kind: EventType,
    ) -> StoreResult<Event> {
        let title = normalize_title(title.into()).inspect_err(|_| {
            debug!("event=event_add module=store status=rejected reason=empty_title date={date}");
        })?;
        let event = Event {
            id: self.ids.allocate(),
            title,
            time: time.into(),
            kind,
        };

        self.events.entry(date).or_default().insert(0, event.clone());
        info!(
            "event=event_add module=store status=ok id={} date={} type={}",
            event.id, date, event.kind
        );
        self.notify(StoreChange::Added { id: event.id, date });
        Ok(event)
    }

    /// Updates title/time/type of `id` and optionally moves it to `new_date`.
    ///
    /// Same date: the event is replaced in place and keeps its position.
    /// Different date: it leaves `old_date` (pruned when emptied) and is
    /// inserted first under `new_date`.
    ///
    /// A stale `old_date` is tolerated: the event is looked up under every
    /// key, and when it exists nowhere it is inserted under `new_date` as is.
    ///
    /// # Errors
    /// - `Validation(EmptyTitle)` when `title` is blank; the store is untouched.
    pub fn update_event(
        &mut self,
        id: EventId,
        new_date: DateKey,
        title: impl Into<String>,
        time: impl Into<String>,
        kind: EventType,
        old_date: DateKey,
    ) -> StoreResult<Event> {
        let title = normalize_title(title.into()).inspect_err(|_| {
            debug!("event=event_update module=store status=rejected reason=empty_title id={id}");
        })?;
        let updated = Event {
            id,
            title,
            time: time.into(),
            kind,
        };

        let source = if self.position(old_date, id).is_some() {
            Some(old_date)
        } else {
            let located = self.locate(id);
            warn!(
                "event=event_update module=store status=stale_key id={} old_date={} found_at={}",
                id,
                old_date,
                located.map_or_else(|| "none".to_string(), |date| date.to_string())
            );
            located
        };

        match source {
            Some(from) if from == new_date => {
                if let Some(slot) = self
                    .events
                    .get_mut(&from)
                    .and_then(|list| list.iter_mut().find(|event| event.id == id))
                {
                    *slot = updated.clone();
                }
            }
            Some(from) => {
                self.remove_from(from, id);
                self.events.entry(new_date).or_default().insert(0, updated.clone());
            }
            None => {
                self.ids.observe(id);
                self.events.entry(new_date).or_default().insert(0, updated.clone());
            }
        }

        let from = source.unwrap_or(old_date);
        info!(
            "event=event_update module=store status=ok id={} from={} to={} type={}",
            id, from, new_date, updated.kind
        );
        self.notify(StoreChange::Updated {
            id,
            from,
            to: new_date,
        });
        Ok(updated)
    }

    /// Removes `id` from `date`'s list.
    ///
    /// Idempotent: returns `None` and changes nothing when the id is absent.
    pub fn delete_event(&mut self, id: EventId, date: DateKey) -> Option<Event> {
        match self.remove_from(date, id) {
            Some(removed) => {
                info!("event=event_delete module=store status=ok id={id} date={date}");
                self.notify(StoreChange::Deleted { id, date });
                Some(removed)
            }
            None => {
                debug!("event=event_delete module=store status=noop id={id} date={date}");
                None
            }
        }
    }

    /// Events for `date` passing `filter`, in stored order.
    pub fn events_for_date(&self, date: DateKey, filter: TypeFilter) -> Vec<Event> {
        self.events
            .get(&date)
            .map(|list| {
                list.iter()
                    .filter(|event| filter.matches(event))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Non-empty filtered day lists inside `month`, in calendar order.
    pub fn events_in_month(
        &self,
        month: MonthCursor,
        filter: TypeFilter,
    ) -> Vec<(DateKey, Vec<Event>)> {
        self.events
            .range(month.first_day()..)
            .take_while(|(date, _)| month.contains(**date))
            .filter_map(|(date, list)| {
                let matching: Vec<Event> = list
                    .iter()
                    .filter(|event| filter.matches(event))
                    .cloned()
                    .collect();
                (!matching.is_empty()).then_some((*date, matching))
            })
            .collect()
    }

    /// Finds an event and the date it is filed under.
    pub fn find(&self, id: EventId) -> Option<(DateKey, &Event)> {
        self.events.iter().find_map(|(date, list)| {
            list.iter()
                .find(|event| event.id == id)
                .map(|event| (*date, event))
        })
    }

    /// Read-only view of the whole mapping.
    pub fn events(&self) -> &EventsByDate {
        &self.events
    }

    pub fn date_keys(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.events.keys().copied()
    }

    pub fn contains_date(&self, date: DateKey) -> bool {
        self.events.contains_key(&date)
    }

    /// Total number of events across all dates.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Registers an observer called after each successful mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(candidate, _)| *candidate != id);
        before != self.observers.len()
    }

    fn notify(&mut self, change: StoreChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }

    fn position(&self, date: DateKey, id: EventId) -> Option<usize> {
        self.events
            .get(&date)
            .and_then(|list| list.iter().position(|event| event.id == id))
    }

    fn locate(&self, id: EventId) -> Option<DateKey> {
        self.find(id).map(|(date, _)| date)
    }

    fn remove_from(&mut self, date: DateKey, id: EventId) -> Option<Event> {
        let index = self.position(date, id)?;
        let list = self.events.get_mut(&date)?;
        let removed = list.remove(index);
        if list.is_empty() {
            self.events.remove(&date);
        }
        Some(removed)
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for EventStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("events", &self.events)
            .field("next_id", &self.ids.peek())
            .field("observers", &self.observers.len())
            .finish()
    }
}
