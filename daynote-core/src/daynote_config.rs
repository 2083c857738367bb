//! Global daynote configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{DayNoteError, DayNoteResult};
use crate::holiday::HolidayCalendar;
use crate::storage::FileStorage;

static DEFAULT_DATA_PATH: &str = "~/.local/share/daynote";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

fn default_true() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

/// Extra holidays, keyed `"M-D"` (fixed) and `"Y-M-D"` (variable).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HolidayTables {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fixed: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variable: BTreeMap<String, String>,
}

/// Global configuration at ~/.config/daynote/config.toml
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DaynoteConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,

    /// Include the builtin holiday tables underneath `holidays`.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub builtin_holidays: bool,

    #[serde(default)]
    pub holidays: HolidayTables,
}

impl Default for DaynoteConfig {
    fn default() -> Self {
        DaynoteConfig {
            data_dir: default_data_path(),
            builtin_holidays: true,
            holidays: HolidayTables::default(),
        }
    }
}

impl DaynoteConfig {
    pub fn config_path() -> DayNoteResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayNoteError::Config("Could not determine config directory".into()))?
            .join("daynote");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/daynote/config.toml, writing a commented-out default first
    /// if it does not exist yet.
    pub fn load() -> DayNoteResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DayNoteResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| DayNoteError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayNoteError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_path())
    }

    pub fn holiday_calendar(&self) -> DayNoteResult<HolidayCalendar> {
        HolidayCalendar::from_tables(
            self.builtin_holidays,
            &self.holidays.fixed,
            &self.holidays.variable,
        )
    }

    /// Save the current config to ~/.config/daynote/config.toml
    pub fn save(&self) -> DayNoteResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| DayNoteError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| DayNoteError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayNoteResult<()> {
        let contents = format!(
            "\
# daynote configuration

# Where notes and events are stored:
# data_dir = \"{}\"

# Set to false to drop the builtin holiday tables:
# builtin_holidays = true

# Holidays on the same day every year (MONTH-DAY):
# [holidays.fixed]
# \"5-1\" = \"Labour Day\"

# Holidays on one specific date (YEAR-MONTH-DAY):
# [holidays.variable]
# \"2025-3-14\" = \"Holi\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayNoteError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayNoteError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_default_config_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daynote/config.toml");
        DaynoteConfig::create_default_config(&path).unwrap();

        let config = DaynoteConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, default_data_path());
        assert!(config.builtin_holidays);
        assert!(config.holidays.fixed.is_empty());
    }

    #[test]
    fn test_holiday_tables_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/daynote\"\n\
             builtin_holidays = false\n\
             [holidays.fixed]\n\"5-1\" = \"Labour Day\"\n\
             [holidays.variable]\n\"2025-3-14\" = \"Holi\"\n",
        )
        .unwrap();

        let config = DaynoteConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/daynote"));

        let holidays = config.holiday_calendar().unwrap();
        assert_eq!(holidays.resolve(&"2030-5-1".parse().unwrap()), Some("Labour Day"));
        assert_eq!(holidays.resolve(&"2025-3-14".parse().unwrap()), Some("Holi"));
        assert_eq!(holidays.resolve(&"2025-1-1".parse().unwrap()), None);
    }

    #[test]
    fn test_default_serializes_to_empty_toml() {
        let content = toml::to_string_pretty(&DaynoteConfig::default()).unwrap();
        assert!(!content.contains("data_dir"));
        assert!(!content.contains("builtin_holidays"));
    }
}
