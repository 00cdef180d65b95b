// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commit window recording.

use rp_adapters::{CommitWalk, Repository, VcsError};
use rp_core::{CommitId, CommitWindow, WindowError};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
enum RecordError {
    #[error(transparent)]
    Vcs(#[from] VcsError),
    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Collects the commits a build introduced since the job's earlier builds.
#[derive(Debug, Clone, Copy)]
pub struct CommitRecorder {
    cap: usize,
}

impl CommitRecorder {
    /// `cap` bounds the commits collected for one build.
    pub fn new(cap: usize) -> Self {
        Self { cap: cap.max(1) }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Record the window for the repository's current HEAD.
    ///
    /// `frontier` holds the commits the job already knows (empty for its
    /// first build); `previous` is the window of the job's previous build.
    /// Never fails: a repository error yields [`CommitWindow::empty`].
    pub async fn record<R: Repository + ?Sized>(
        &self,
        repo: &R,
        frontier: &[CommitId],
        previous: Option<&CommitWindow>,
    ) -> CommitWindow {
        match self.try_record(repo, frontier, previous).await {
            Ok(window) => {
                info!(
                    commits = window.len(),
                    head = %window.latest_commit().map(|c| c.short(8)).unwrap_or("-"),
                    parent = %window.parent_commit().map(|c| c.short(8)).unwrap_or("-"),
                    "recorded commit window"
                );
                window
            }
            Err(e) => {
                warn!(error = %e, "could not read repository, recording empty window");
                CommitWindow::empty()
            }
        }
    }

    async fn try_record<R: Repository + ?Sized>(
        &self,
        repo: &R,
        frontier: &[CommitId],
        previous: Option<&CommitWindow>,
    ) -> Result<CommitWindow, RecordError> {
        let head = repo.head_commit().await?;
        let known: HashSet<&CommitId> = frontier.iter().collect();
        if known.contains(&head) {
            return Ok(rebuilt_window(head, previous)?);
        }

        let mut walk = CommitWalk::new(repo, head.clone(), self.cap + 1);
        let mut commits = Vec::new();
        let mut seen = HashSet::new();
        let mut parent = None;
        let mut reached_root = true;

        while let Some(commit) = walk.next().await? {
            if known.contains(&commit) {
                parent = Some(commit);
                reached_root = false;
                break;
            }
            if commits.len() >= self.cap {
                if !known.is_empty() {
                    parent = Some(commit);
                }
                reached_root = false;
                break;
            }
            if seen.insert(commit.clone()) {
                commits.push(commit);
            }
        }

        // Disconnected from everything the job knew: the oldest commit
        // becomes the boundary.
        if reached_root && !known.is_empty() && commits.len() > 1 {
            parent = commits.pop();
        }

        Ok(CommitWindow::new(commits, head, parent.unwrap_or_default())?)
    }
}

/// Window for a HEAD the job already knew.
///
/// Rebuilding the previous build's HEAD keeps that build's parent, so the
/// rebuild compares against the same history. Any other known HEAD becomes
/// its own parent.
fn rebuilt_window(
    head: CommitId,
    previous: Option<&CommitWindow>,
) -> Result<CommitWindow, WindowError> {
    let parent = previous
        .filter(|prev| prev.latest_commit() == Some(&head))
        .and_then(|prev| prev.parent_commit());
    match parent {
        Some(parent) => CommitWindow::new(Vec::new(), head, parent.clone()),
        None => Ok(CommitWindow::unchanged(head)),
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
