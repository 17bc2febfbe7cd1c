//! TOML-based application configuration.
//!
//! Stores the interval parameters and notification preferences.
//! Configuration is stored at `~/.config/focusloop/config.toml`
//! (`~/.config/focusloop-dev/` when `FOCUSLOOP_ENV=dev`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::clock::Intervals;
use crate::error::ConfigError;

/// Returns `~/.config/focusloop[-dev]/` based on FOCUSLOOP_ENV.
///
/// Set FOCUSLOOP_ENV=dev to use the development config directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSLOOP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusloop-dev")
    } else {
        base_dir.join("focusloop")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirUnavailable(e.to_string()))?;
    Ok(dir)
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusloop/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub intervals: Intervals,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the defaults first if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("using default config: {e}");
            Self::default()
        })
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// as the key's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        set_json_value_by_path(&mut json, key, value)?;
        *self =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        self.save()
    }
}

fn get_json_value_by_path<'a>(
    root: &'a serde_json::Value,
    key: &str,
) -> Option<&'a serde_json::Value> {
    if key.is_empty() {
        return None;
    }

    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn set_json_value_by_path(
    root: &mut serde_json::Value,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let mut parts = key.split('.').peekable();
    if parts.peek().is_none() {
        return Err(ConfigError::UnknownKey(key.into()));
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        let is_leaf = parts.peek().is_none();
        if is_leaf {
            let obj = current
                .as_object_mut()
                .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
            let existing = obj
                .get(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| ConfigError::ParseFailed(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    let n = value.parse::<u64>().map_err(|_| {
                        ConfigError::ParseFailed(format!("cannot parse '{value}' as number"))
                    })?;
                    serde_json::Value::Number(n.into())
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        current = current
            .get_mut(part)
            .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
    }

    Err(ConfigError::UnknownKey(key.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.intervals.work_minutes, 25);
        assert!(parsed.notifications.enabled);
    }

    #[test]
    fn empty_toml_fills_every_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.intervals, Intervals::default());
        assert!(parsed.notifications.enabled);
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let parsed: Config = toml::from_str("[intervals]\nwork_minutes = 50\n").unwrap();
        assert_eq!(parsed.intervals.work_minutes, 50);
        assert_eq!(parsed.intervals.short_break_minutes, 5);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("intervals.work_minutes").as_deref(), Some("25"));
        assert_eq!(cfg.get("notifications.enabled").as_deref(), Some("true"));
        assert!(cfg.get("intervals.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        set_json_value_by_path(&mut json, "intervals.long_break_minutes", "20").unwrap();
        assert_eq!(
            get_json_value_by_path(&json, "intervals.long_break_minutes").unwrap(),
            &serde_json::Value::Number(20.into())
        );
    }

    #[test]
    fn set_json_value_by_path_updates_nested_bool() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        set_json_value_by_path(&mut json, "notifications.enabled", "false").unwrap();
        assert_eq!(
            get_json_value_by_path(&json, "notifications.enabled").unwrap(),
            &serde_json::Value::Bool(false)
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(set_json_value_by_path(&mut json, "intervals.nonexistent", "1").is_err());
    }

    #[test]
    fn set_json_value_by_path_rejects_invalid_type() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(set_json_value_by_path(&mut json, "intervals.work_minutes", "soon").is_err());
    }
}
