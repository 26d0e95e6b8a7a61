use crate::data::{Persistable, TripHistory};
use anyhow::Result;

pub fn run() -> Result<()> {
    let history = TripHistory::load()?;
    write_trips(&history, &mut std::io::stdout())
}

pub(crate) fn write_trips<W: std::io::Write>(history: &TripHistory, out: &mut W) -> Result<()> {
    writeln!(out, "My Trips")?;
    writeln!(out, "---")?;
    if history.is_empty() {
        writeln!(out, "  No upcoming trips.")?;
        writeln!(out, "  When you book a trip, you will see your trip details here.")?;
    } else {
        writeln!(
            out,
            "  {:<4} {:<24} {:<12} {:<12} {:<6} {}",
            "#", "Destination", "Start", "End", "Days", "Assistance"
        )?;
        for (i, t) in history.entries().iter().enumerate() {
            let destination = if t.end_location.is_empty() { "Unknown" } else { t.end_location.as_str() };
            let days = t.days().map(|d| d.to_string()).unwrap_or_else(|| "?".to_string());
            writeln!(
                out,
                "  {:<4} {:<24} {:<12} {:<12} {:<6} {}",
                i + 1,
                destination,
                t.start_date,
                t.end_date,
                days,
                t.assistance
            )?;
        }
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} trip(s)", history.len())?;
    Ok(())
}
