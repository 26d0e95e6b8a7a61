use crate::data::{AppSettings, Persistable, TripHistory};
use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized successfully.");
    Ok(())
}

/// Writes default settings and an empty trip history into `dir`.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    AppSettings::default().save_to(dir)?;
    TripHistory::default().save_to(dir)?;
    info!(dir = %dir.display(), "data files initialized");
    Ok(())
}
