// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read accessor over recorded commit windows.

use rp_core::{BuildId, BuildStore, CommitId, CommitWindow, JobId};
use std::collections::HashSet;

/// Pure read view over a [`BuildStore`].
///
/// Absence (deleted build, unknown build, nothing recorded) is always a
/// legitimate answer, never an error.
pub struct BuildCommitIndex<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: BuildStore + ?Sized> BuildCommitIndex<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a S {
        self.store
    }

    pub fn window_of(&self, build: &BuildId) -> Option<&'a CommitWindow> {
        self.store.commit_window(build)
    }

    /// Builds of `job`, newest first.
    pub fn builds_of(&self, job: &JobId) -> Vec<BuildId> {
        self.store.builds_of(job)
    }

    /// Window of the existing build that precedes `build` in its job.
    pub fn previous_window(&self, build: &BuildId) -> Option<&'a CommitWindow> {
        let previous = self.store.previous_build(build)?;
        self.window_of(&previous)
    }

    /// Commits the job already knew before `build`, newest build first.
    ///
    /// The previous build's HEAD comes first. Parents are included since
    /// they were reachable when their build recorded.
    pub fn frontier(&self, build: &BuildId, limit: usize) -> Vec<CommitId> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        for earlier in self.earlier_builds(build) {
            let Some(window) = self.window_of(&earlier) else {
                continue;
            };
            let known = window
                .latest_commit()
                .into_iter()
                .chain(window.commits())
                .chain(window.parent_commit());
            for commit in known {
                if out.len() >= limit {
                    return out;
                }
                if seen.insert(commit) {
                    out.push(commit.clone());
                }
            }
        }
        out
    }

    /// The commit history `build` is compared with, newest first.
    ///
    /// Starts with the build's own commits, then follows `parent_commit`
    /// through the windows of earlier builds of the same job. When no earlier
    /// window holds the parent, the bare parent ends the chain.
    pub fn history_of(&self, build: &BuildId, limit: usize) -> Vec<CommitId> {
        let Some(window) = self.window_of(build) else {
            return Vec::new();
        };
        if window.is_unresolved() {
            return Vec::new();
        }

        let mut history: Vec<CommitId> = window.commits().iter().take(limit).cloned().collect();
        let mut seen: HashSet<CommitId> = history.iter().cloned().collect();
        let earlier = self.earlier_builds(build);
        let mut cursor = window.parent_commit().cloned();

        while let Some(commit) = cursor.take() {
            if history.len() >= limit || seen.contains(&commit) {
                break;
            }
            let owner = earlier
                .iter()
                .filter_map(|b| self.window_of(b))
                .find_map(|w| w.position(&commit).map(|pos| (w, pos)));
            let Some((owner, pos)) = owner else {
                seen.insert(commit.clone());
                history.push(commit);
                break;
            };
            for c in &owner.commits()[pos..] {
                if history.len() >= limit {
                    break;
                }
                if seen.insert(c.clone()) {
                    history.push(c.clone());
                }
            }
            cursor = owner.parent_commit().cloned();
        }
        history
    }

    /// Builds of the same job that precede `build`, newest first.
    pub(crate) fn earlier_builds(&self, build: &BuildId) -> Vec<BuildId> {
        let Some(job) = self.store.lookup(build).map(|b| b.job.clone()) else {
            return Vec::new();
        };
        self.store.builds_of(&job).into_iter().skip_while(|b| b != build).skip(1).collect()
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
