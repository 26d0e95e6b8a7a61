use crate::dates;
use crate::error::TripError;
use crate::data::trip::{Assistance, DraftUpdate, GuestKind, TripDraft};
use tracing::debug;

/// Owns the single in-progress `TripDraft` and keeps its date range valid.
#[derive(Debug, Default, Clone)]
pub struct TripDraftStore {
    draft: TripDraft,
}

impl TripDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TripDraft {
        &self.draft
    }

    /// Merges `update` into the draft. Guest counters merge one by one and
    /// dates go through the same validation as `set_start_date` /
    /// `set_end_date` (start first). Either every field applies or none does.
    pub fn update(&mut self, update: DraftUpdate) -> Result<(), TripError> {
        let mut staged = self.clone();

        if let Some(name) = update.name {
            staged.draft.name = name;
        }
        if let Some(start_location) = update.start_location {
            staged.draft.start_location = start_location;
        }
        if let Some(end_location) = update.end_location {
            staged.draft.end_location = end_location;
        }
        if let Some(start) = update.start_date {
            staged.set_start_date(&start)?;
        }
        if let Some(end) = update.end_date {
            staged.set_end_date(&end)?;
        }
        if let Some(guests) = update.guests {
            let g = &mut staged.draft.guests;
            g.adults = guests.adults.unwrap_or(g.adults);
            g.children = guests.children.unwrap_or(g.children);
            g.infants = guests.infants.unwrap_or(g.infants);
        }
        if let Some(assistance) = update.assistance {
            staged.draft.assistance = assistance;
        }

        *self = staged;
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    pub fn set_start_location(&mut self, location: &str) {
        self.draft.start_location = location.to_string();
    }

    pub fn set_end_location(&mut self, location: &str) {
        self.draft.end_location = location.to_string();
    }

    pub fn increment_guest(&mut self, kind: GuestKind) {
        let count = self.draft.guests.get_mut(kind);
        *count = count.saturating_add(1);
    }

    /// Floors at zero.
    pub fn decrement_guest(&mut self, kind: GuestKind) {
        let count = self.draft.guests.get_mut(kind);
        *count = count.saturating_sub(1);
    }

    /// Sets the start date. If the current end date falls before the new
    /// start, the end date is moved onto the start so the range stays valid.
    pub fn set_start_date(&mut self, text: &str) -> Result<(), TripError> {
        let start = dates::parse(text).ok_or_else(|| {
            TripError::validation("start_date", format!("'{}' is not a valid DD/MM/YYYY date", text))
        })?;
        let formatted = dates::format(start);

        if let Some(end) = dates::parse(&self.draft.end_date) {
            if end < start {
                debug!(from = %self.draft.end_date, to = %formatted, "end date snapped to new start");
                self.draft.end_date = formatted.clone();
            }
        }
        self.draft.start_date = formatted;
        Ok(())
    }

    /// Sets the end date. Requires a start date and refuses an end before it.
    pub fn set_end_date(&mut self, text: &str) -> Result<(), TripError> {
        if self.draft.start_date.is_empty() {
            return Err(TripError::precondition(
                "select a start date before the end date",
            ));
        }
        let end = dates::parse(text).ok_or_else(|| {
            TripError::validation("end_date", format!("'{}' is not a valid DD/MM/YYYY date", text))
        })?;
        if let Some(start) = dates::parse(&self.draft.start_date) {
            if end < start {
                return Err(TripError::validation(
                    "end_date",
                    "end date cannot be before start date",
                ));
            }
        }
        self.draft.end_date = dates::format(end);
        Ok(())
    }

    pub fn set_assistance(&mut self, assistance: Assistance) {
        self.draft.assistance = assistance;
    }

    /// Assistance as chosen on the assistance step: a disabled toggle stores
    /// `NotRequired` whatever mode is highlighted.
    pub fn choose_assistance(&mut self, enabled: bool, mode: Assistance) {
        self.draft.assistance = if enabled { mode } else { Assistance::NotRequired };
    }

    pub fn reset(&mut self) {
        self.draft = TripDraft::default();
    }
}
