use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE: &str = "tripwiz.log";

static TRACING_INIT: Once = Once::new();

/// Routes tracing output to `tripwiz.log` in `dir`. The terminal belongs to
/// the wizard, so nothing is written to stdout or stderr.
///
/// `RUST_LOG` wins over `default_filter`; an unparseable filter falls back to `info`.
pub fn init_tracing(dir: &Path, default_filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .with_context(|| format!("failed to open {}", dir.join(LOG_FILE).display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_tracing_creates_log_file() {
        let tmp = TempDir::new().unwrap();
        init_tracing(tmp.path(), "not a [valid filter").unwrap();
        assert!(tmp.path().join(LOG_FILE).exists());
    }

    #[test]
    fn test_init_tracing_missing_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(init_tracing(&missing, "info").is_err());
    }
}
