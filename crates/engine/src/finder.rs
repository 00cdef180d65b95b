// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Branch intersection search.
//!
//! Walks a target job's builds newest first and returns the first one whose
//! recorded commits overlap the current build's history.

use crate::index::BuildCommitIndex;
use rp_core::{BuildId, BuildStore, CommitId, CommitWindow, ReferencePolicy};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Outcome of an intersection search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intersection {
    /// `build` shares `commit` (the newest shared commit) with the history.
    Found { build: BuildId, commit: CommitId },
    /// Nothing intersected; `build` is the newest completed target build.
    Fallback { build: BuildId },
    NotFound,
}

impl Intersection {
    /// The build to use as reference, if any.
    pub fn build(&self) -> Option<&BuildId> {
        match self {
            Intersection::Found { build, .. } | Intersection::Fallback { build } => Some(build),
            Intersection::NotFound => None,
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intersection::Found { build, commit } => {
                write!(f, "found {} at {}", build, commit.short(8))
            }
            Intersection::Fallback { build } => write!(f, "fallback {}", build),
            Intersection::NotFound => write!(f, "not found"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntersectionFinder {
    policy: ReferencePolicy,
}

impl IntersectionFinder {
    pub fn new(policy: ReferencePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReferencePolicy {
        &self.policy
    }

    /// Search `targets` (newest first) for a build sharing commits with
    /// `history`. `current` is never its own reference.
    ///
    /// Every examined candidate costs its window length against
    /// `max_commits`; candidates without a window are skipped for free.
    pub fn find<S: BuildStore + ?Sized>(
        &self,
        current: &BuildId,
        history: &[CommitId],
        targets: &[BuildId],
        index: &BuildCommitIndex<'_, S>,
    ) -> Intersection {
        let known: HashSet<&CommitId> = history.iter().collect();
        let mut budget = self.policy.max_commits;

        for candidate in targets.iter().filter(|b| *b != current) {
            let Some(window) = examinable(candidate, index) else {
                debug!(build = %current, candidate = %candidate, "no completed window, skipping");
                continue;
            };

            let theirs: HashSet<&CommitId> = window.commits().iter().collect();
            let shared = history.iter().find(|c| theirs.contains(c));
            let has_unknown = window.commits().iter().any(|c| !known.contains(c));

            if self.policy.skip_unknown_commits && has_unknown {
                debug!(
                    build = %current,
                    candidate = %candidate,
                    "candidate has unknown commits, skipping"
                );
            } else if let Some(commit) = shared {
                debug!(
                    build = %current,
                    candidate = %candidate,
                    commit = %commit.short(8),
                    "intersection"
                );
                return Intersection::Found { build: candidate.clone(), commit: commit.clone() };
            }

            budget = budget.saturating_sub(window.len());
            if budget == 0 {
                debug!(build = %current, candidate = %candidate, "commit budget exhausted");
                break;
            }
        }

        if self.policy.latest_build_if_not_found {
            if let Some(build) = latest_completed(current, targets, index) {
                return Intersection::Fallback { build };
            }
        }
        Intersection::NotFound
    }
}

/// Window of a live, completed candidate.
fn examinable<'a, S: BuildStore + ?Sized>(
    candidate: &BuildId,
    index: &BuildCommitIndex<'a, S>,
) -> Option<&'a CommitWindow> {
    let build = index.store().lookup(candidate)?;
    if !build.is_completed() {
        return None;
    }
    index.window_of(candidate)
}

fn latest_completed<S: BuildStore + ?Sized>(
    current: &BuildId,
    targets: &[BuildId],
    index: &BuildCommitIndex<'_, S>,
) -> Option<BuildId> {
    targets
        .iter()
        .filter(|b| *b != current)
        .find(|b| index.store().lookup(b).is_some_and(|build| build.is_completed()))
        .cloned()
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod tests;
