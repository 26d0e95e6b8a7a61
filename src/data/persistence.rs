use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Set once at startup by main() from the --data-dir argument.
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Call this from main() before any load/save operations.
pub fn set_data_dir(path: PathBuf) {
    let _ = DATA_DIR.set(path);
}

pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = DATA_DIR.get() {
        return Ok(dir.clone());
    }
    // Fallback when running tests or if set_data_dir was not called
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(cwd.join("config"))
}

/// A document stored as one JSON or YAML file in the data directory.
pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;
    fn is_json() -> bool;

    fn load() -> Result<Self> {
        Self::load_from(&get_data_dir()?)
    }

    fn save(&self) -> Result<()> {
        self.save_to(&get_data_dir()?)
    }

    /// Load from an explicit directory. A missing file yields `Default`.
    fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::filename());
        if !path.exists() {
            debug!(path = %path.display(), "no file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if Self::is_json() {
            serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse JSON from {}", path.display()))
        } else {
            serde_norway::from_str(&contents)
                .with_context(|| format!("failed to parse YAML from {}", path.display()))
        }
    }

    /// Save into an explicit directory, creating it if needed.
    fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dir {}", dir.display()))?;
        let path = dir.join(Self::filename());
        let contents = if Self::is_json() {
            serde_json::to_string_pretty(self).context("failed to serialize JSON")?
        } else {
            serde_norway::to_string(self).context("failed to serialize YAML")?
        };
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }
}
