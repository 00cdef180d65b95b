// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod build;
pub mod config;
pub mod job;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rp_core::{ConfigError, ReferenceConfig, SystemClock};
use rp_engine::Engine;
use rp_storage::Store;
use tracing::debug;

use crate::exit_error::{ExitError, BAD_CONFIG};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "refpoint.toml";

/// Flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Directory holding the event log and snapshot
    #[arg(long, env = "RP_STATE_DIR", default_value = ".refpoint", global = true)]
    pub state_dir: PathBuf,

    /// Configuration file (default: ./refpoint.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

/// Command-line overrides applied on top of the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Job whose builds are searched for a reference
    #[arg(long, global = true)]
    pub reference_job: Option<String>,

    /// Comparison budget in commits
    #[arg(long, global = true)]
    pub max_commits: Option<usize>,

    /// Skip candidate builds carrying commits unknown to the current build
    #[arg(long, global = true)]
    pub skip_unknown_commits: bool,

    /// Fall back to the newest target build when nothing intersects
    #[arg(long, global = true)]
    pub latest_build_if_not_found: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut ReferenceConfig) {
        if let Some(job) = &self.reference_job {
            config.reference_job = job.clone();
        }
        if let Some(max) = self.max_commits {
            config.max_commits = max;
        }
        if self.skip_unknown_commits {
            config.skip_unknown_commits = true;
        }
        if self.latest_build_if_not_found {
            config.latest_build_if_not_found = true;
        }
    }
}

/// Resolve the effective configuration: explicit file, then the default
/// file in `cwd` when present, then built-in defaults; overrides last.
pub fn load_config(global: &GlobalArgs, cwd: &Path) -> Result<ReferenceConfig> {
    let mut config = match &global.config {
        Some(path) => ReferenceConfig::load(path).map_err(config_error)?,
        None => {
            let fallback = cwd.join(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                ReferenceConfig::load(&fallback).map_err(config_error)?
            } else {
                ReferenceConfig::default()
            }
        }
    };
    global.overrides.apply(&mut config);
    config.validate().map_err(config_error)?;
    Ok(config)
}

fn config_error(err: ConfigError) -> anyhow::Error {
    ExitError::new(BAD_CONFIG, err.to_string()).into()
}

/// Open the state directory and build an engine over it.
pub fn open_engine(global: &GlobalArgs) -> Result<Engine<SystemClock>> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = load_config(global, &cwd)?;
    let store = Store::open(&global.state_dir)
        .with_context(|| format!("cannot open state in {}", global.state_dir.display()))?;
    debug!(
        state_dir = %global.state_dir.display(),
        max_commits = config.max_commits,
        "opened state"
    );
    Ok(Engine::new(store, config, SystemClock))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
