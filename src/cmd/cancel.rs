use crate::data::{Persistable, TripHistory};
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(number: usize) -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    let removed = cancel_in_dir(&dir, number)?;
    println!("Cancelled trip {} to {}.", number, removed);
    Ok(())
}

/// Removes trip `number` (1-based, as listed by `trips`) and saves the rest.
/// Returns the destination of the removed trip.
pub(crate) fn cancel_in_dir(dir: &Path, number: usize) -> Result<String> {
    let mut history = TripHistory::load_from(dir)?;
    let index = number
        .checked_sub(1)
        .context("trip numbers start at 1")?;
    let removed = history
        .remove(index)
        .with_context(|| format!("cannot cancel trip {}", number))?;
    history.save_to(dir)?;
    Ok(removed.end_location)
}
