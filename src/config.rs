//! Configuration file handling
//!
//! Settings live in `<config dir>/segshuf/config.toml`. The directory can be
//! moved with the `SEGSHUF_CONFIG_DIR` environment variable. Missing fields
//! take their defaults, so an empty file is a valid config.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::ReadyPolicy;
use crate::session::SessionOptions;
use crate::theme::Theme;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SEGSHUF_CONFIG_DIR";

/// Smallest boundary poll interval accepted from the config file (ms).
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub playback: PlaybackConfig,
    pub data: DataConfig,
    pub ui: UiConfig,
}

/// Player polling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// How often to check for the end of the current segment (ms)
    pub poll_interval_ms: u64,
    /// Pause between player readiness checks (ms)
    pub ready_interval_ms: u64,
    /// Readiness checks before proceeding anyway
    pub ready_max_attempts: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            ready_interval_ms: 500,
            ready_max_attempts: 40,
        }
    }
}

/// Traversal settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Also auto-advance at segment ends when not shuffling
    pub auto_advance_sequential: bool,
    /// Fixed shuffle seed; random when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Where segment data is read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Default dataset (JSON keyed by video id). Defaults to `<data dir>/segshuf/segments.json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments_file: Option<PathBuf>,
    /// Per-video override directory. Defaults to `<data dir>/segshuf/overrides`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides_dir: Option<PathBuf>,
}

/// Panel appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme: "player", "classic" or "ocean"
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "player".to_string(),
        }
    }
}

impl Config {
    /// Directory holding `config.toml`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("segshuf"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Dataset path, falling back to the platform data directory.
    pub fn segments_file(&self) -> Result<PathBuf> {
        match &self.data.segments_file {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("segments.json")),
        }
    }

    /// Override directory, falling back to the platform data directory.
    pub fn overrides_dir(&self) -> Result<PathBuf> {
        match &self.data.overrides_dir {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("overrides")),
        }
    }

    /// Boundary poll interval, never below [`MIN_POLL_INTERVAL_MS`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.player.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }

    pub fn ready_policy(&self) -> ReadyPolicy {
        ReadyPolicy {
            interval: Duration::from_millis(self.player.ready_interval_ms),
            max_attempts: self.player.ready_max_attempts,
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            auto_advance_sequential: self.playback.auto_advance_sequential,
        }
    }

    /// Configured theme; unknown names fall back to the default with a warning.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.ui.theme, "unknown theme, using default");
            Theme::default()
        })
    }
}

fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join("segshuf"))
}
