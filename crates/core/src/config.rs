// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference resolution configuration.
//!
//! Loaded from `refpoint.toml` (every key optional) and passed explicitly to
//! the engine; there is no global configuration state.

use crate::id::JobId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default comparison budget.
pub const DEFAULT_MAX_COMMITS: usize = 100;

/// Default number of commits the recorder collects for one build.
pub const DEFAULT_MAX_RECORDED_COMMITS: usize = 200;

/// Errors that can occur loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },
}

/// Search policy for the intersection finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePolicy {
    /// Comparison budget: bounds the current build's history and the number
    /// of candidate commits examined.
    pub max_commits: usize,
    /// Disqualify candidates carrying commits the current build never saw.
    pub skip_unknown_commits: bool,
    /// Fall back to the newest target build when nothing intersects.
    pub latest_build_if_not_found: bool,
}

impl Default for ReferencePolicy {
    fn default() -> Self {
        Self {
            max_commits: DEFAULT_MAX_COMMITS,
            skip_unknown_commits: false,
            latest_build_if_not_found: false,
        }
    }
}

/// Full configuration consumed by the reference engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceConfig {
    /// Target job name; empty means the build's own job (or its primary branch).
    pub reference_job: String,
    pub max_commits: usize,
    pub skip_unknown_commits: bool,
    pub latest_build_if_not_found: bool,
    /// Recorder cap on commits collected per build.
    pub max_recorded_commits: usize,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        let policy = ReferencePolicy::default();
        Self {
            reference_job: String::new(),
            max_commits: policy.max_commits,
            skip_unknown_commits: policy.skip_unknown_commits,
            latest_build_if_not_found: policy.latest_build_if_not_found,
            max_recorded_commits: DEFAULT_MAX_RECORDED_COMMITS,
        }
    }
}

impl ReferenceConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_toml_str(&content)
    }

    /// Reject out-of-range values before they reach the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_commits == 0 {
            return Err(ConfigError::NotPositive { field: "max_commits" });
        }
        if self.max_recorded_commits == 0 {
            return Err(ConfigError::NotPositive { field: "max_recorded_commits" });
        }
        Ok(())
    }

    /// Configured target job, `None` when empty.
    pub fn target_job(&self) -> Option<JobId> {
        let name = self.reference_job.trim();
        if name.is_empty() {
            None
        } else {
            Some(JobId::new(name))
        }
    }

    pub fn policy(&self) -> ReferencePolicy {
        ReferencePolicy {
            max_commits: self.max_commits,
            skip_unknown_commits: self.skip_unknown_commits,
            latest_build_if_not_found: self.latest_build_if_not_found,
        }
    }

    crate::setters! {
        into {
            reference_job: String,
        }
        set {
            max_commits: usize,
            skip_unknown_commits: bool,
            latest_build_if_not_found: bool,
            max_recorded_commits: usize,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
