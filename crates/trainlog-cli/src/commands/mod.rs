//! Subcommand implementations and the session setup they share.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use trainlog_core::config::{load_config_from, TrainlogConfig};
use trainlog_core::engine::TrainingQueryEngine;
use trainlog_core::loader::load_roster;
use trainlog_core::model::PersonRecord;
use trainlog_report::{render, Format, Report};

pub mod count;
pub mod expiring;
pub mod fiscal_year;
pub mod init;
pub mod interactive;
pub mod validate;

/// Options accepted by every subcommand.
pub struct GlobalArgs {
    pub roster: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<String>,
}

/// Config, output format, and roster engine for one invocation.
pub struct Session {
    pub config: TrainlogConfig,
    pub format: Format,
    pub engine: TrainingQueryEngine,
}

impl Session {
    /// Load config, resolve the output format, and load the roster.
    pub fn open(args: &GlobalArgs) -> Result<Self> {
        let config = load_config_from(args.config.as_deref())?;
        let format = resolve_format(args.format.as_deref(), &config)?;
        let roster = load_roster_with_fallback(args.roster.as_deref(), &config.default_roster)?;
        let engine = TrainingQueryEngine::new(roster, config.engine_config());
        Ok(Self {
            config,
            format,
            engine,
        })
    }

    /// Render a report in the session's format.
    pub fn render(&self, report: &Report<'_>) -> Result<String> {
        render(report, self.format)
    }
}

/// Pick the output format from `--format`, or the configured default.
pub fn resolve_format(arg: Option<&str>, config: &TrainlogConfig) -> Result<Format> {
    arg.unwrap_or(&config.default_format)
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))
}

/// Load the roster at `explicit`, falling back to `default` when the explicit
/// file is missing or unreadable.
///
/// Content errors (bad record shape, bad dates) are never masked.
pub fn load_roster_with_fallback(
    explicit: Option<&Path>,
    default: &Path,
) -> Result<Vec<PersonRecord>> {
    if let Some(path) = explicit {
        match load_roster(path) {
            Ok(roster) => return Ok(roster),
            Err(e) if e.is_source_error() && path != default => {
                tracing::warn!("{e}; using default roster {}", default.display());
            }
            Err(e) => return Err(e.into()),
        }
    }

    load_roster(default)
        .with_context(|| format!("failed to load default roster {}", default.display()))
}

/// Split a comma-separated list of training names.
pub fn parse_training_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
