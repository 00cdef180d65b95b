// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution with a hard timeout.

use std::process::Output;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Timeout for `git rev-parse` and similar single-object lookups.
pub const GIT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for one page of `git rev-list`.
pub const GIT_LOG_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("{description}: failed to spawn: {source}")]
    Spawn {
        description: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{description}: timed out after {}ms", .timeout.as_millis())]
    Timeout { description: String, timeout: Duration },
}

/// Run `cmd` to completion, killing it if it outlives `timeout`.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, SubprocessError> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => {
            Err(SubprocessError::Spawn { description: description.to_string(), source })
        }
        Err(_) => {
            tracing::warn!(
                description,
                timeout_ms = timeout.as_millis() as u64,
                "subprocess timed out"
            );
            Err(SubprocessError::Timeout { description: description.to_string(), timeout })
        }
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
