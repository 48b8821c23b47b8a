//! Configuration management for Classboard.
//!
//! Loads configuration from ${CLASSBOARD_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_SUBJECTS;
use crate::timetable::{Timetable, Weekday};

pub mod paths {
    //! Path resolution for Classboard configuration and data files.
    //!
    //! CLASSBOARD_HOME resolution order:
    //! 1. CLASSBOARD_HOME environment variable (if set)
    //! 2. ~/.config/classboard (default)
    //! 3. ./.classboard (no home directory available)

    use std::path::PathBuf;

    /// Returns the Classboard home directory.
    pub fn classboard_home() -> PathBuf {
        if let Ok(home) = std::env::var("CLASSBOARD_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".classboard"),
            |h| h.join(".config").join("classboard"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        classboard_home().join("config.toml")
    }

    /// Returns the default log file path.
    pub fn log_path() -> PathBuf {
        classboard_home().join("classboard.log")
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Per-day timetable overrides. Days left unset keep the built-in row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimetableConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thursday: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday: Option<Vec<String>>,
}

impl TimetableConfig {
    fn day(&self, day: Weekday) -> Option<&Vec<String>> {
        match day {
            Weekday::Monday => self.monday.as_ref(),
            Weekday::Tuesday => self.tuesday.as_ref(),
            Weekday::Wednesday => self.wednesday.as_ref(),
            Weekday::Thursday => self.thursday.as_ref(),
            Weekday::Friday => self.friday.as_ref(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive (e.g. "info", "classboard_core=debug").
    pub level: String,
    /// Log file path; defaults to `$CLASSBOARD_HOME/classboard.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Returns the effective log file path.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(paths::log_path)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dashboard header title
    pub title: String,

    /// Subjects with attendance counters
    pub attendance_subjects: Vec<String>,

    /// Timetable overrides
    pub timetable: TimetableConfig,

    /// Logging
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            attendance_subjects: DEFAULT_SUBJECTS.map(str::to_string).to_vec(),
            timetable: TimetableConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_TITLE: &str = "Section H - Timetable";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            config
                .timetable()
                .with_context(|| format!("Invalid timetable in {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Builds the effective timetable (built-in rows with overrides applied).
    ///
    /// # Errors
    /// Returns an error if an override row does not have exactly 7 entries.
    pub fn timetable(&self) -> Result<Timetable> {
        Weekday::ALL
            .into_iter()
            .try_fold(Timetable::section_h(), |timetable, day| {
                match self.timetable.day(day) {
                    Some(labels) => timetable.with_day(day, labels.clone()),
                    None => Ok(timetable),
                }
            })
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.title, "Section H - Timetable");
        assert_eq!(config.attendance_subjects, ["Math", "Physics", "ETI", "TEM"]);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.timetable().unwrap(), Timetable::section_h());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
title = "Section J"
attendance_subjects = ["Chemistry"]

[timetable]
friday = ["Chem", "", "", "", "", "", "Chem LAB"]
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.title, "Section J");
        assert_eq!(config.attendance_subjects, ["Chemistry"]);
        assert_eq!(config.log, LogConfig::default());

        let timetable = config.timetable().unwrap();
        assert_eq!(timetable.subject(Weekday::Friday, 1), Some("Chem"));
        assert_eq!(timetable.subject(Weekday::Friday, 2), None);
        assert_eq!(timetable.subject(Weekday::Monday, 1), Some("Math"));
    }

    #[test]
    fn test_load_rejects_short_timetable_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[timetable]\nmonday = [\"Math\", \"ETI\"]\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Invalid timetable"));
        assert!(message.contains("Monday has 2 periods"));
    }

    #[test]
    fn test_load_rejects_unknown_day() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[timetable]\nsaturday = []\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_init_creates_file_and_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::init(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("attendance_subjects"));

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_log_file_path_override() {
        let log = LogConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/cb.log")),
        };
        assert_eq!(log.file_path(), PathBuf::from("/tmp/cb.log"));
    }
}
