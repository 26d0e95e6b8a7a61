use crate::data::{TripDraft, TripDraftStore, TripHistory, TripSession};
use crate::dates;
use crate::error::TripError;
use crate::wizard::WizardStep;
use tracing::{debug, info};

/// Drives the booking steps over a borrowed session. The only state it owns
/// is the current step; field data lives in the session's draft store.
pub struct WizardController<'a> {
    session: &'a mut TripSession,
    step: WizardStep,
}

impl<'a> WizardController<'a> {
    pub fn new(session: &'a mut TripSession) -> Self {
        WizardController {
            session,
            step: WizardStep::Details,
        }
    }

    pub fn current_step(&self) -> usize {
        self.step.index()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_booked(&self) -> bool {
        self.step == WizardStep::Booked
    }

    pub fn draft(&self) -> &TripDraft {
        self.session.draft.draft()
    }

    pub fn draft_mut(&mut self) -> &mut TripDraftStore {
        &mut self.session.draft
    }

    pub fn history(&self) -> &TripHistory {
        &self.session.history
    }

    pub fn history_mut(&mut self) -> &mut TripHistory {
        &mut self.session.history
    }

    /// Evaluates the guard of the current step without moving.
    pub fn check_step(&self) -> Result<(), TripError> {
        let draft = self.draft();
        let incomplete = |field: &'static str| TripError::StepIncomplete {
            step: self.step,
            field,
        };
        match self.step {
            WizardStep::Details => {
                if draft.name.is_empty() {
                    return Err(incomplete("name"));
                }
                if draft.start_location.is_empty() {
                    return Err(incomplete("start_location"));
                }
                if draft.end_location.is_empty() {
                    return Err(incomplete("end_location"));
                }
                Ok(())
            }
            WizardStep::Dates => {
                if dates::parse(&draft.start_date).is_none() {
                    return Err(incomplete("start_date"));
                }
                if !dates::is_range_valid(&draft.start_date, &draft.end_date) {
                    return Err(incomplete("end_date"));
                }
                Ok(())
            }
            WizardStep::Guests | WizardStep::Assistance | WizardStep::Confirmation => Ok(()),
            WizardStep::Booked => Err(TripError::precondition(
                "trip is already booked; start a new booking",
            )),
        }
    }

    /// Moves to the next step if the current one is complete. Advancing from
    /// `Confirmation` commits the draft to history and ends in `Booked`.
    pub fn advance(&mut self) -> Result<WizardStep, TripError> {
        if let Err(err) = self.check_step() {
            debug!(step = ?self.step, error = %err, "advance blocked");
            return Err(err);
        }
        if self.step == WizardStep::Confirmation {
            self.session.history.commit(self.session.draft.draft());
        }
        let next = self
            .step
            .next()
            .ok_or_else(|| TripError::precondition("no step after the last one"))?;
        info!(from = ?self.step, to = ?next, "wizard advanced");
        self.step = next;
        Ok(next)
    }

    /// Returns to the previous step. The draft is left untouched and nothing
    /// is validated. Fails at `Details` and once `Booked`.
    pub fn go_back(&mut self) -> Result<WizardStep, TripError> {
        let previous = self.step.previous().ok_or_else(|| {
            TripError::precondition(format!("cannot go back from {}", self.step.title()))
        })?;
        info!(from = ?self.step, to = ?previous, "wizard went back");
        self.step = previous;
        Ok(previous)
    }

    /// Clears the draft and restarts at `Details`. History is kept.
    pub fn start_new_booking(&mut self) {
        self.session.draft.reset();
        self.step = WizardStep::Details;
        info!("new booking started");
    }
}
