// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commit window recorded by a single build.

use crate::id::CommitId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Violations of the [`CommitWindow`] invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("commit {0} appears more than once")]
    DuplicateCommit(CommitId),
    #[error("parent commit {0} is also listed as a new commit")]
    ParentInCommits(CommitId),
    #[error("latest commit {latest} does not match newest recorded commit {newest}")]
    LatestMismatch { latest: CommitId, newest: CommitId },
}

/// The commits newly introduced by one build, newest first.
///
/// Immutable once created. `latest_commit` is the build's HEAD and stays set
/// for a no-op rebuild (no new commits). `parent_commit` is the boundary commit
/// already known to the job; it is empty for a job's first build and when
/// HEAD could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct CommitWindow {
    commits: Vec<CommitId>,
    latest_commit: CommitId,
    parent_commit: CommitId,
}

#[derive(Deserialize)]
struct RawWindow {
    #[serde(default)]
    commits: Vec<CommitId>,
    #[serde(default)]
    latest_commit: CommitId,
    #[serde(default)]
    parent_commit: CommitId,
}

impl TryFrom<RawWindow> for CommitWindow {
    type Error = WindowError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        CommitWindow::new(raw.commits, raw.latest_commit, raw.parent_commit)
    }
}

impl CommitWindow {
    /// Create a validated window.
    pub fn new(
        commits: Vec<CommitId>,
        latest_commit: CommitId,
        parent_commit: CommitId,
    ) -> Result<Self, WindowError> {
        let mut seen = HashSet::with_capacity(commits.len());
        for commit in &commits {
            if !seen.insert(commit) {
                return Err(WindowError::DuplicateCommit(commit.clone()));
            }
        }
        if !parent_commit.is_empty() && seen.contains(&parent_commit) {
            return Err(WindowError::ParentInCommits(parent_commit));
        }
        if let Some(newest) = commits.first() {
            if *newest != latest_commit {
                return Err(WindowError::LatestMismatch {
                    latest: latest_commit,
                    newest: newest.clone(),
                });
            }
        }
        Ok(Self { commits, latest_commit, parent_commit })
    }

    /// The window recorded when the repository could not be read.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Window for a build whose HEAD was already known to the job.
    pub fn unchanged(head: CommitId) -> Self {
        Self { commits: Vec::new(), latest_commit: head.clone(), parent_commit: head }
    }

    pub fn commits(&self) -> &[CommitId] {
        &self.commits
    }

    /// HEAD of the build, `None` when unresolved.
    pub fn latest_commit(&self) -> Option<&CommitId> {
        self.latest_commit.non_empty()
    }

    /// Boundary commit known to the job, `None` for a first build.
    pub fn parent_commit(&self) -> Option<&CommitId> {
        self.parent_commit.non_empty()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// True when HEAD could not be resolved while recording.
    pub fn is_unresolved(&self) -> bool {
        self.latest_commit.is_empty()
    }

    pub fn contains(&self, commit: &CommitId) -> bool {
        self.commits.contains(commit)
    }

    /// Position of `commit` in the window (0 = newest).
    pub fn position(&self, commit: &CommitId) -> Option<usize> {
        self.commits.iter().position(|c| c == commit)
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
