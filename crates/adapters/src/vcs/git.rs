// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Repository, VcsError};
use crate::subprocess::{run_with_timeout, GIT_LOG_TIMEOUT, GIT_QUERY_TIMEOUT};
use async_trait::async_trait;
use rp_core::CommitId;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Repository backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn git(&self, args: &[String], timeout: Duration) -> Result<Output, VcsError> {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.dir).args(args).env("GIT_TERMINAL_PROMPT", "0");
        let description = format!("git {}", args.first().map(String::as_str).unwrap_or(""));
        Ok(run_with_timeout(cmd, timeout, &description).await?)
    }
}

fn failure(command: &str, output: &Output) -> VcsError {
    VcsError::CommandFailed {
        command: command.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

#[async_trait]
impl Repository for GitCli {
    async fn head_commit(&self) -> Result<CommitId, VcsError> {
        let args = ["rev-parse", "--verify", "--quiet", "HEAD^{commit}"].map(String::from);
        let output = self.git(&args, GIT_QUERY_TIMEOUT).await?;
        if !output.status.success() {
            tracing::debug!(
                dir = %self.dir.display(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "HEAD does not resolve"
            );
            return Err(VcsError::NoHead);
        }
        let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if sha.is_empty() {
            return Err(VcsError::NoHead);
        }
        Ok(CommitId::new(sha))
    }

    async fn log(
        &self,
        from: &CommitId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<CommitId>, VcsError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let args = vec![
            "rev-list".to_string(),
            format!("--skip={skip}"),
            format!("--max-count={limit}"),
            from.to_string(),
            "--".to_string(),
        ];
        let output = self.git(&args, GIT_LOG_TIMEOUT).await?;
        if !output.status.success() {
            return Err(failure("git rev-list", &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(CommitId::new)
            .collect())
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
