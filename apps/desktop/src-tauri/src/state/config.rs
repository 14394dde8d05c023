//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PEBBLE_*`)
//! 2. Defaults (this file)
//!
//! There is no config file and nothing is persisted; preferences live for
//! the session.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// UI color theme
    pub theme: Theme,

    /// Key-click sound effects
    pub sound_enabled: bool,

    /// Keep the calculator window above other windows
    pub always_on_top: bool,
}

/// UI color theme.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the OS preference
    #[default]
    System,

    Light,

    Dark,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            theme: Theme::System,
            sound_enabled: true,
            always_on_top: false,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PEBBLE_THEME`: `system` | `light` | `dark`
    /// - `PEBBLE_SOUND`: `0` to disable key-click sounds
    /// - `PEBBLE_ALWAYS_ON_TOP`: `1` to keep the window on top
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(theme) = std::env::var("PEBBLE_THEME") {
            match theme.as_str() {
                "light" => config.theme = Theme::Light,
                "dark" => config.theme = Theme::Dark,
                "system" => config.theme = Theme::System,
                other => tracing::warn!(theme = %other, "Unknown PEBBLE_THEME, keeping default"),
            }
        }

        if let Ok(sound) = std::env::var("PEBBLE_SOUND") {
            config.sound_enabled = sound != "0";
        }

        if let Ok(on_top) = std::env::var("PEBBLE_ALWAYS_ON_TOP") {
            config.always_on_top = on_top == "1";
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.theme, Theme::System);
        assert!(config.sound_enabled);
        assert!(!config.always_on_top);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ConfigState::default()).expect("serialize config");
        assert_eq!(json["theme"], "system");
        assert_eq!(json["soundEnabled"], true);
        assert_eq!(json["alwaysOnTop"], false);
    }
}
