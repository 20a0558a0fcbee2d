//! Calendar view session.
//!
//! # Responsibility
//! - Own the event store for one mounted calendar page.
//! - Track visible month, selected day, active type filter and the drawer.
//! - Answer render-time queries (grid, day cells, selected-day list).
//!
//! # Invariants
//! - At most one form session is open at a time.
//! - Mounting always starts from the given seed; nothing survives a remount.
//! - Render queries never mutate the store.

use crate::calendar::grid::{MonthCursor, MonthGrid};
use crate::config::CoreConfig;
use crate::model::date_key::DateKey;
use crate::model::event::{Event, EventId, EventType, TypeFilter};
use crate::service::event_form::EventForm;
use crate::store::event_store::{EventStore, EventsByDate, StoreError, StoreResult};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum number of event dots drawn inside one day cell.
pub const MAX_DAY_DOTS: usize = 3;

/// View-level errors.
#[derive(Debug)]
pub enum ViewError {
    /// Target event does not exist in the store.
    EventNotFound(EventId),
    /// Drawer action without an open form.
    NoOpenForm,
    /// Store rejected the submitted draft; the form stays open.
    Rejected(StoreError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::NoOpenForm => write!(f, "no event form is open"),
            Self::Rejected(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Compact marker for one event inside a day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDot {
    pub id: EventId,
    pub kind: EventType,
    /// Hover text, `title • time`.
    pub tooltip: String,
}

/// Render model for one day of the visible month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: DateKey,
    pub day: u32,
    pub is_selected: bool,
    /// First events of the day under the active filter, capped at `MAX_DAY_DOTS`.
    pub dots: Vec<EventDot>,
    /// Matching events beyond the drawn dots.
    pub overflow: usize,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        !self.dots.is_empty()
    }
}

/// One mounted calendar page.
#[derive(Debug)]
pub struct CalendarView {
    store: EventStore,
    cursor: MonthCursor,
    selected: DateKey,
    filter: TypeFilter,
    form: Option<EventForm>,
}

impl CalendarView {
    /// Mounts a fresh view over `seed`, showing and selecting `today`.
    ///
    /// # Errors
    /// Propagates seed validation failures from the store.
    pub fn mount(today: DateKey, seed: EventsByDate) -> StoreResult<Self> {
        let store = EventStore::with_seed(seed)?;
        info!(
            "event=view_mount module=service status=ok today={} events={}",
            today,
            store.len()
        );
        Ok(Self {
            store,
            cursor: MonthCursor::containing(today),
            selected: today,
            filter: TypeFilter::All,
            form: None,
        })
    }

    /// Mounts with the seed set selected by `config`.
    pub fn mount_with_config(today: DateKey, config: &CoreConfig) -> StoreResult<Self> {
        Self::mount(today, config.seed.events())
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Mutable store access, e.g. for registering observers.
    pub fn store_mut(&mut self) -> &mut EventStore {
        &mut self.store
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn selected_date(&self) -> DateKey {
        self.selected
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    /// Steps back one month; stays put at the first representable month.
    pub fn previous_month(&mut self) -> MonthCursor {
        match self.cursor.checked_previous() {
            Some(cursor) => self.cursor = cursor,
            None => debug!(
                "event=month_nav module=view status=noop reason=range_start month={}",
                self.cursor.first_day()
            ),
        }
        self.cursor
    }

    /// Steps forward one month; stays put at the last representable month.
    pub fn next_month(&mut self) -> MonthCursor {
        match self.cursor.checked_next() {
            Some(cursor) => self.cursor = cursor,
            None => debug!(
                "event=month_nav module=view status=noop reason=range_end month={}",
                self.cursor.first_day()
            ),
        }
        self.cursor
    }

    /// Shows a specific month without changing the selection.
    pub fn show_month(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
    }

    /// Selects a day; the visible month is left unchanged.
    pub fn select_date(&mut self, date: DateKey) {
        self.selected = date;
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::derive(self.cursor)
    }

    pub fn month_label(&self) -> String {
        self.cursor.label()
    }

    /// Render models for every day of the visible month.
    pub fn day_cells(&self) -> Vec<DayCell> {
        self.grid()
            .days()
            .map(|date| {
                let events = self.store.events_for_date(date, self.filter);
                let overflow = events.len().saturating_sub(MAX_DAY_DOTS);
                let dots = events
                    .iter()
                    .take(MAX_DAY_DOTS)
                    .map(|event| EventDot {
                        id: event.id,
                        kind: event.kind,
                        tooltip: format!("{} • {}", event.title, event.time),
                    })
                    .collect();
                DayCell {
                    date,
                    day: date.day(),
                    is_selected: date == self.selected,
                    dots,
                    overflow,
                }
            })
            .collect()
    }

    /// Events of the selected day under the active filter.
    pub fn selected_events(&self) -> Vec<Event> {
        self.store.events_for_date(self.selected, self.filter)
    }

    /// Deletes an event listed for the selected day.
    pub fn delete_event(&mut self, id: EventId) -> Option<Event> {
        self.store.delete_event(id, self.selected)
    }

    /// Opens the drawer with an empty draft for the selected day.
    ///
    /// Replaces any form that was already open.
    pub fn open_add_form(&mut self) -> &mut EventForm {
        debug!(
            "event=form_open module=service status=ok mode=add date={}",
            self.selected
        );
        self.form.insert(EventForm::open_add(self.selected))
    }

    /// Opens the drawer pre-filled from an existing event.
    pub fn open_edit_form(&mut self, id: EventId) -> Result<&mut EventForm, ViewError> {
        let (date, event) = self.store.find(id).ok_or(ViewError::EventNotFound(id))?;
        let form = EventForm::open_edit(event, date);
        debug!("event=form_open module=service status=ok mode=edit id={id} date={date}");
        Ok(self.form.insert(form))
    }

    pub fn form(&self) -> Option<&EventForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        self.form.as_mut()
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Submits the open form and closes the drawer on success.
    ///
    /// # Errors
    /// - `NoOpenForm` when the drawer is closed.
    /// - `Rejected` when the draft is invalid; the form stays open.
    pub fn submit_form(&mut self) -> Result<Event, ViewError> {
        let form = self.form.take().ok_or(ViewError::NoOpenForm)?;
        form.submit(&mut self.store).map_err(|err| {
            let cause = err.cause().clone();
            self.form = Some(err.into_form());
            ViewError::Rejected(cause)
        })
    }

    /// Closes the drawer without saving; returns whether one was open.
    pub fn cancel_form(&mut self) -> bool {
        match self.form.take() {
            Some(form) => {
                form.cancel();
                true
            }
            None => false,
        }
    }

    /// Deletes the event being edited and closes the drawer.
    pub fn delete_from_form(&mut self) -> Result<Option<Event>, ViewError> {
        let form = self.form.take().ok_or(ViewError::NoOpenForm)?;
        Ok(form.delete(&mut self.store))
    }
}
