//! Kino configuration file handling

use anyhow::{Context, Result};
use kino_animation::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Kino configuration (kino.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct KinoConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

/// Defaults for `kino trace` when flags are omitted
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct TraceConfig {
    /// Simulated frame time in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: f32,
    /// Number of ticks to simulate
    #[serde(default = "default_ticks")]
    pub ticks: usize,
}

fn default_tick_ms() -> f32 {
    1000.0 / 60.0
}

fn default_ticks() -> usize {
    120
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            ticks: default_ticks(),
        }
    }
}

impl KinoConfig {
    /// Load configuration from a file or a directory containing kino.toml.
    ///
    /// A directory without kino.toml yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("kino.toml")
        } else {
            path.to_path_buf()
        };

        if path.is_dir() && !config_path.exists() {
            tracing::debug!("No kino.toml in {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kino_animation::{AdvancePolicy, ResetPolicy};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = KinoConfig::from_toml("").unwrap();
        assert_eq!(config, KinoConfig::default());
        assert_eq!(config.playback.advance, AdvancePolicy::SingleStep);
        assert_eq!(config.trace.ticks, 120);
    }

    #[test]
    fn test_parse_playback_table() {
        let config = KinoConfig::from_toml(
            r#"
            [playback]
            advance = "catch-up"
            reset = "clear-ping-pong"

            [trace]
            tick_ms = 33.0
            "#,
        )
        .unwrap();

        assert_eq!(config.playback.advance, AdvancePolicy::CatchUp);
        assert_eq!(config.playback.reset, ResetPolicy::ClearPingPong);
        assert_eq!(config.trace.tick_ms, 33.0);
        assert_eq!(config.trace.ticks, 120);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(KinoConfig::from_toml("[playback]\nadvance = \"warp\"\n").is_err());
    }

    #[test]
    fn test_load_from_dir_and_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(KinoConfig::load(dir.path()).unwrap(), KinoConfig::default());

        let mut config = KinoConfig::default();
        config.playback.advance = AdvancePolicy::CatchUp;
        config.trace.ticks = 8;
        fs::write(dir.path().join("kino.toml"), config.to_toml().unwrap()).unwrap();

        assert_eq!(KinoConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = KinoConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
