//! trainlog configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::error::TrainingError;
use crate::query::DEFAULT_WARNING_WINDOW_DAYS;

/// Top-level trainlog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainlogConfig {
    /// Roster loaded when none is given, or when the given one can't be read.
    #[serde(default = "default_roster")]
    pub default_roster: PathBuf,
    /// Trainings checked by the fiscal-year report when none are given.
    #[serde(default = "default_trainings")]
    pub default_trainings: Vec<String>,
    /// Days after the reference date that count as "expires soon".
    #[serde(default = "default_warning_window")]
    pub warning_window_days: u32,
    /// Output format used when `--format` is not passed.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_roster() -> PathBuf {
    PathBuf::from("trainings.txt")
}
fn default_trainings() -> Vec<String> {
    vec![
        "Electrical Safety for Labs".to_string(),
        "X-Ray Safety".to_string(),
        "Laboratory Safety Training".to_string(),
    ]
}
fn default_warning_window() -> u32 {
    DEFAULT_WARNING_WINDOW_DAYS
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for TrainlogConfig {
    fn default() -> Self {
        Self {
            default_roster: default_roster(),
            default_trainings: default_trainings(),
            warning_window_days: default_warning_window(),
            default_format: default_format(),
        }
    }
}

impl TrainlogConfig {
    /// Engine settings derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            warning_window_days: self.warning_window_days,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `trainlog.toml` in the current directory
/// 2. `~/.config/trainlog/config.toml`
///
/// Environment variable override: `TRAINLOG_ROSTER`.
pub fn load_config_from(path: Option<&Path>) -> Result<TrainlogConfig, TrainingError> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            return Err(TrainingError::Config {
                path: p.to_path_buf(),
                reason: "file not found".into(),
            });
        }
    } else {
        let local = PathBuf::from("trainlog.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path).map_err(|e| TrainingError::Config {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let config = parse_config_str(&content, &path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => TrainlogConfig::default(),
    };

    if let Ok(roster) = std::env::var("TRAINLOG_ROSTER") {
        if !roster.is_empty() {
            config.default_roster = PathBuf::from(roster);
        }
    }

    Ok(config)
}

/// Parse a TOML string into a configuration.
pub fn parse_config_str(
    content: &str,
    source_path: &Path,
) -> Result<TrainlogConfig, TrainingError> {
    toml::from_str(content).map_err(|e| TrainingError::Config {
        path: source_path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("trainlog"))
}
