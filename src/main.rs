mod cmd;
mod data;
mod dates;
mod error;
mod logging;
mod ui;
mod wizard;

use clap::{Parser, Subcommand};
use data::{AppSettings, Assistance};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "tripwiz", about = "book trips step by step")]
struct Cli {
    /// Path to the data directory containing config and trip files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data files
    Init,
    /// List booked trips
    Trips,
    /// Cancel a booked trip by its number in `trips`
    Cancel {
        /// Trip number as listed by `trips` (starts at 1)
        number: usize,
    },
    /// Book a trip without the interactive wizard
    Book {
        /// Traveler name
        #[arg(long)]
        name: String,
        /// Start location
        #[arg(long)]
        from: String,
        /// Destination
        #[arg(long)]
        to: String,
        /// Start date (DD/MM/YYYY)
        #[arg(long)]
        start: String,
        /// End date (DD/MM/YYYY)
        #[arg(long)]
        end: String,
        #[arg(long, default_value_t = 1)]
        adults: u32,
        #[arg(long, default_value_t = 0)]
        children: u32,
        #[arg(long, default_value_t = 0)]
        infants: u32,
        /// flight, bus, car, train or none
        #[arg(long, default_value = "none")]
        assistance: Assistance,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Checked before the log file lands in the directory.
    let needs_init = dir_needs_init(&data_dir);
    std::fs::create_dir_all(&data_dir)?;
    let log_filter = AppSettings::load_from(&data_dir)
        .map(|s| s.log_filter)
        .unwrap_or_else(|_| AppSettings::default().log_filter);
    logging::init_tracing(&data_dir, &log_filter)?;
    info!(data_dir = %data_dir.display(), "starting");

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && needs_init {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Trips) => cmd::trips::run(),
        Some(Commands::Cancel { number }) => cmd::cancel::run(number),
        Some(Commands::Book {
            name,
            from,
            to,
            start,
            end,
            adults,
            children,
            infants,
            assistance,
        }) => cmd::book::run(&cmd::book::BookRequest {
            name,
            from,
            to,
            start,
            end,
            adults,
            children,
            infants,
            assistance,
        }),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");
        assert!(dir_needs_init(&missing));
    }

    #[test]
    fn test_dir_needs_init_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_nonempty_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file.txt"), "data").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }
}
