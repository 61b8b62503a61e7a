// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification stack configuration, including loading
//! and saving user preferences to a `notifications.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use notification_stack::config::{self, StackConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.capacity = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("notifications.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.capacity, Some(3));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::ui::{Capacity, IdleTimeout, TickInterval};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "notifications.toml";
const APP_NAME: &str = "NotificationStack";

/// User-facing stack settings. Every field is optional; missing values fall
/// back to [`defaults`] and out-of-range values are clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    #[serde(default)]
    pub capacity: Option<usize>,
    #[serde(default)]
    pub idle_timeout_secs: Option<u64>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            capacity: Some(defaults::DEFAULT_CAPACITY),
            idle_timeout_secs: Some(defaults::DEFAULT_IDLE_TIMEOUT_SECS),
            tick_interval_ms: Some(defaults::DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl StackConfig {
    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.capacity.map(Capacity::new).unwrap_or_default()
    }

    #[must_use]
    pub fn idle_timeout(&self) -> IdleTimeout {
        self.idle_timeout_secs
            .map(IdleTimeout::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.tick_interval_ms
            .map(TickInterval::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<StackConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(StackConfig::default())
}

pub fn save(config: &StackConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a configuration file. A file that cannot be parsed is replaced by
/// the defaults rather than failing startup.
pub fn load_from_path(path: &Path) -> Result<StackConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid notification config, using defaults");
            Ok(StackConfig::default())
        }
    }
}

pub fn save_to_path(config: &StackConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = StackConfig {
            capacity: Some(3),
            idle_timeout_secs: Some(10),
            ..StackConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("notifications.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, StackConfig::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_keeps_missing_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "capacity = 2\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.capacity().get(), 2);
        assert_eq!(loaded.idle_timeout_secs, None);
        assert_eq!(loaded.idle_timeout().as_duration(), Duration::from_secs(5));
    }

    #[test]
    fn unknown_timing_keys_are_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "capacity = 3\nfade_in_ms = 300\ncollapse_ms = 200\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(
            loaded,
            StackConfig {
                capacity: Some(3),
                idle_timeout_secs: None,
                tick_interval_ms: None,
            }
        );
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = StackConfig {
            capacity: Some(0),
            tick_interval_ms: Some(5),
            ..StackConfig::default()
        };
        assert_eq!(config.capacity().get(), defaults::MIN_CAPACITY);
        assert_eq!(
            config.tick_interval().millis(),
            defaults::MIN_TICK_INTERVAL_MS
        );
    }
}
