//! Mount-time configuration.
//!
//! The host page passes a JSON object to `mount` (or names a preset). Every
//! field has a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "jobboard_theme";
pub const JOB_SEEKER_STORAGE_KEY: &str = "jb-theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-bs-theme";
pub const DEFAULT_CONTROL_ID: &str = "themeToggle";
pub const DEFAULT_RTL_THRESHOLD: usize = 30;

/// Error returned while building a [`ThemeConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown theme preset: {0}")]
    UnknownPreset(String),
    #[error("invalid theme config: {0}")]
    Invalid(String),
}

/// How the direction detector writes `dir` when it runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionPolicy {
    /// Detection never runs.
    Off,
    /// Write `rtl` above the threshold, otherwise leave `dir` unset.
    RtlOnly,
    /// Always write `rtl` or `ltr`.
    #[default]
    Normalize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Attribute on `<html>` that stylesheets key on.
    pub theme_attribute: String,
    /// Element id of the toggle button.
    pub control_id: String,
    /// Keep the button's `aria-label` describing the next action.
    pub update_label: bool,
    /// Apply `prefers-color-scheme` when nothing is stored. Never persisted.
    pub follow_system: bool,
    pub direction: DirectionPolicy,
    /// Arabic-block characters needed before the page counts as RTL.
    pub rtl_threshold: usize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            update_label: true,
            follow_system: false,
            direction: DirectionPolicy::Normalize,
            rtl_threshold: DEFAULT_RTL_THRESHOLD,
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a required name is empty.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Named deployment presets.
    ///
    /// - `jobboard`: the defaults, with label updates and direction detection.
    /// - `job-seeker`: `jb-theme` key, no label updates, no direction detection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] for any other name.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "jobboard" => Ok(Self::default()),
            "job-seeker" | "job_seeker" => Ok(Self {
                storage_key: JOB_SEEKER_STORAGE_KEY.to_owned(),
                update_label: false,
                direction: DirectionPolicy::Off,
                ..Self::default()
            }),
            other => Err(ConfigError::UnknownPreset(other.to_owned())),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("control_id", &self.control_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}
