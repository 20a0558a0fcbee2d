//! Add/edit form session for one event.
//!
//! # Responsibility
//! - Hold a disposable draft while the user edits one event.
//! - Apply the draft to the store atomically on submit.
//!
//! # Invariants
//! - Draft edits never touch the store before `submit`.
//! - A date change is applied only through the store's move-on-update path.
//! - A rejected submit hands the session back unchanged.

use crate::model::date_key::DateKey;
use crate::model::event::{Event, EventId, EventType, EventValidationError};
use crate::store::event_store::{EventStore, StoreError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whether the session creates a new event or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit {
        id: EventId,
        /// Date the event was filed under when the session opened.
        original_date: DateKey,
    },
}

/// Editable field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub time: String,
    pub kind: EventType,
    pub date: DateKey,
}

/// Ephemeral editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    mode: FormMode,
    draft: EventDraft,
}

/// Rejected submit; carries the untouched session for another attempt.
#[derive(Debug)]
pub struct FormError {
    form: Box<EventForm>,
    cause: StoreError,
}

impl FormError {
    pub fn cause(&self) -> &StoreError {
        &self.cause
    }

    pub fn is_empty_title(&self) -> bool {
        matches!(
            self.cause,
            StoreError::Validation(EventValidationError::EmptyTitle)
        )
    }

    /// Returns the session so the user can keep editing.
    pub fn into_form(self) -> EventForm {
        *self.form
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "event form rejected: {}", self.cause)
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

impl EventForm {
    /// Opens an empty draft targeting `date`.
    pub fn open_add(date: DateKey) -> Self {
        Self {
            mode: FormMode::Add,
            draft: EventDraft {
                title: String::new(),
                time: String::new(),
                kind: EventType::default(),
                date,
            },
        }
    }

    /// Opens a draft pre-filled from `event`, currently filed under `date`.
    pub fn open_edit(event: &Event, date: DateKey) -> Self {
        Self {
            mode: FormMode::Edit {
                id: event.id,
                original_date: date,
            },
            draft: EventDraft {
                title: event.title.clone(),
                time: event.time.clone(),
                kind: event.kind,
                date,
            },
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.draft.time = time.into();
    }

    pub fn set_kind(&mut self, kind: EventType) {
        self.draft.kind = kind;
    }

    pub fn set_date(&mut self, date: DateKey) {
        self.draft.date = date;
    }

    /// Applies the draft and closes the session.
    ///
    /// Add mode creates a new event; edit mode updates the original event,
    /// moving it when the draft date differs from the original date.
    ///
    /// # Errors
    /// Returns the session inside `FormError` when the store rejects the
    /// draft (blank title). The store is untouched in that case.
    pub fn submit(self, store: &mut EventStore) -> Result<Event, FormError> {
        let draft = &self.draft;
        let result = match self.mode {
            FormMode::Add => store.add_event(
                draft.date,
                draft.title.as_str(),
                draft.time.as_str(),
                draft.kind,
            ),
            FormMode::Edit { id, original_date } => store.update_event(
                id,
                draft.date,
                draft.title.as_str(),
                draft.time.as_str(),
                draft.kind,
                original_date,
            ),
        };

        result.map_err(|cause| {
            debug!("event=form_submit module=service status=rejected reason={cause}");
            FormError {
                form: Box::new(self),
                cause,
            }
        })
    }

    /// Discards the draft.
    pub fn cancel(self) {
        debug!("event=form_cancel module=service status=ok");
    }

    /// Deletes the edited event and closes the session.
    ///
    /// Add-mode sessions have nothing to delete and return `None`.
    pub fn delete(self, store: &mut EventStore) -> Option<Event> {
        match self.mode {
            FormMode::Add => None,
            FormMode::Edit { id, original_date } => store.delete_event(id, original_date),
        }
    }
}
