// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version-control client used to discover the commits of a build.

mod git;
mod walk;

pub use git::GitCli;
pub use walk::CommitWalk;

use crate::subprocess::SubprocessError;
use async_trait::async_trait;
use rp_core::CommitId;
use thiserror::Error;

/// Errors from version-control operations
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("HEAD does not resolve to a commit")]
    NoHead,
    #[error("unknown commit: {0}")]
    UnknownCommit(CommitId),
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error(transparent)]
    Subprocess(#[from] SubprocessError),
}

/// Read access to a repository's commit graph.
#[async_trait]
pub trait Repository: Send + Sync {
    /// The commit currently checked out.
    async fn head_commit(&self) -> Result<CommitId, VcsError>;

    /// Commits reachable from `from`, newest first, skipping the first
    /// `skip` and returning at most `limit`.
    async fn log(
        &self,
        from: &CommitId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<CommitId>, VcsError>;

    /// Commits from `head` back to (excluding) `stop`, at most `cap`.
    async fn commits_since(
        &self,
        head: &CommitId,
        stop: Option<&CommitId>,
        cap: usize,
    ) -> Result<Vec<CommitId>, VcsError> {
        let mut walk = CommitWalk::new(self, head.clone(), cap);
        let mut out = Vec::new();
        while let Some(commit) = walk.next().await? {
            if Some(&commit) == stop {
                break;
            }
            out.push(commit);
        }
        Ok(out)
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRepository, LogCall};
