use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Traveler name offered on the details step; updated after each booking.
    #[serde(default)]
    pub remembered_name: String,
    /// Default tracing filter when RUST_LOG is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            remembered_name: String::new(),
            log_filter: default_log_filter(),
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Ok(SettingsWrapper::load()?.settings)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        SettingsWrapper {
            settings: self.clone(),
        }
        .save_to(dir)
    }

    /// Remembers `name` unless it is blank. Returns true when it changed.
    pub fn remember_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == self.remembered_name {
            return false;
        }
        self.remembered_name = name.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_app_settings_default_values() {
        let settings = AppSettings::default();
        assert!(settings.remembered_name.is_empty());
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_settings_wrapper_missing_key_uses_default() {
        let wrapper: SettingsWrapper = serde_norway::from_str("other: 1").unwrap();
        assert_eq!(wrapper.settings, AppSettings::default());
    }

    #[test]
    fn test_settings_partial_yaml_fills_defaults() {
        let yaml = "settings:\n  remembered_name: Alex\n";
        let wrapper: SettingsWrapper = serde_norway::from_str(yaml).unwrap();
        assert_eq!(wrapper.settings.remembered_name, "Alex");
        assert_eq!(wrapper.settings.log_filter, "info");
    }

    #[test]
    fn test_settings_save_to_load_from() {
        let tmp = TempDir::new().unwrap();
        let settings = AppSettings {
            remembered_name: "Sam".to_string(),
            log_filter: "debug".to_string(),
        };
        settings.save_to(tmp.path()).unwrap();
        assert_eq!(AppSettings::load_from(tmp.path()).unwrap(), settings);
    }

    #[test]
    fn test_remember_name_ignores_blank_and_unchanged() {
        let mut settings = AppSettings::default();
        assert!(!settings.remember_name("   "));
        assert!(settings.remember_name(" Alex "));
        assert_eq!(settings.remembered_name, "Alex");
        assert!(!settings.remember_name("Alex"));
    }
}
