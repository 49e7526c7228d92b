//! Page configuration parsed from an embedded JSON block.
//!
//! The static site may carry
//! `<script type="application/json" id="portfolio-config">{ ... }</script>`.
//! Every field is optional; a missing block means all defaults. The typing
//! effect only runs when a `typing` section is present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_ACTIVE_NAV_OFFSET, DEFAULT_MESSAGE_DISMISS_MS, DEFAULT_NAVBAR_SHADOW_THRESHOLD, DEFAULT_REVEAL_OFFSET,
    DEFAULT_SHOOTING_STAR_COUNT, DEFAULT_STAR_COUNT, DEFAULT_THEME_STORAGE_KEY, DEFAULT_TYPING_PAUSE_MS,
    DEFAULT_TYPING_RESTART_MS, DEFAULT_TYPING_SPEED_MS,
};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `error`, `warn`, `info`, `debug`, or `trace` (case-insensitive).
    pub log_level: String,
    pub theme_storage_key: String,
    pub star_count: usize,
    pub shooting_star_count: usize,
    pub reveal_offset: f64,
    pub active_nav_offset: f64,
    pub navbar_shadow_threshold: f64,
    pub message_dismiss_ms: u32,
    pub typing: Option<TypingConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            star_count: DEFAULT_STAR_COUNT,
            shooting_star_count: DEFAULT_SHOOTING_STAR_COUNT,
            reveal_offset: DEFAULT_REVEAL_OFFSET,
            active_nav_offset: DEFAULT_ACTIVE_NAV_OFFSET,
            navbar_shadow_threshold: DEFAULT_NAVBAR_SHADOW_THRESHOLD,
            message_dismiss_ms: DEFAULT_MESSAGE_DISMISS_MS,
            typing: None,
        }
    }
}

/// Settings for the optional hero typing effect.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TypingConfig {
    pub selector: String,
    pub phrases: Vec<String>,
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u32,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u32,
    #[serde(default = "default_restart_ms")]
    pub restart_ms: u32,
}

fn default_speed_ms() -> u32 {
    DEFAULT_TYPING_SPEED_MS
}

fn default_pause_ms() -> u32 {
    DEFAULT_TYPING_PAUSE_MS
}

fn default_restart_ms() -> u32 {
    DEFAULT_TYPING_RESTART_MS
}

impl Config {
    /// Parse and validate a config block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if log::Level::from_str(&self.log_level).is_err() {
            return Err(ConfigError::UnknownLogLevel(self.log_level.clone()));
        }
        if let Some(typing) = &self.typing
            && typing.phrases.is_empty()
        {
            return Err(ConfigError::EmptyPhrases);
        }
        Ok(())
    }

    /// Parsed log level; `info` when the stored name is not a level.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}
