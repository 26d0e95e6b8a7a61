use crate::data::{
    AppSettings, Assistance, DraftUpdate, GuestsUpdate, Persistable, TripHistory,
    TripHistoryEntry, TripSession,
};
use crate::wizard::WizardController;
use anyhow::{Context, Result};
use std::path::Path;

/// Everything the wizard would collect, supplied up front.
#[derive(Debug, Clone)]
pub struct BookRequest {
    pub name: String,
    pub from: String,
    pub to: String,
    pub start: String,
    pub end: String,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub assistance: Assistance,
}

pub fn run(request: &BookRequest) -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    let entry = book_in_dir(&dir, request)?;
    println!("Awesome! Your booking has been confirmed.");
    println!(
        "  {} from {} to {} ({})",
        entry.end_location, entry.start_date, entry.end_date, entry.assistance
    );
    Ok(())
}

/// Books against the history stored in `dir` and saves it back.
pub(crate) fn book_in_dir(dir: &Path, request: &BookRequest) -> Result<TripHistoryEntry> {
    let mut session = TripSession::with_history(TripHistory::load_from(dir)?);
    let entry = book(&mut session, request)?;
    session.history.save_to(dir)?;

    let mut settings = AppSettings::load_from(dir)?;
    if settings.remember_name(&request.name) {
        settings.save_to(dir)?;
    }
    Ok(entry)
}

/// Walks every wizard step with the request's values, committing at the end.
pub(crate) fn book(session: &mut TripSession, request: &BookRequest) -> Result<TripHistoryEntry> {
    let mut wizard = WizardController::new(session);

    let store = wizard.draft_mut();
    store.set_name(request.name.trim());
    store.set_start_location(request.from.trim());
    store.set_end_location(request.to.trim());
    wizard.advance().context("trip details")?;

    wizard
        .draft_mut()
        .update(DraftUpdate {
            start_date: Some(request.start.clone()),
            end_date: Some(request.end.clone()),
            ..Default::default()
        })
        .context("trip dates")?;
    wizard.advance().context("trip dates")?;

    wizard.draft_mut().update(DraftUpdate {
        guests: Some(GuestsUpdate {
            adults: Some(request.adults),
            children: Some(request.children),
            infants: Some(request.infants),
        }),
        ..Default::default()
    })?;
    wizard.advance()?;

    wizard.draft_mut().set_assistance(request.assistance);
    wizard.advance()?;

    // Confirmation
    wizard.advance().context("confirming booking")?;
    wizard
        .history()
        .latest()
        .cloned()
        .context("booking was not recorded")
}
