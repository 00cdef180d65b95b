// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{BranchInfo, BuildId, CommitId, CommitWindow, Event, JobId, ReferencePointer};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for commit windows and histories.
pub mod strategies {
    use crate::{CommitId, CommitWindow};
    use proptest::prelude::*;

    /// Commit ids drawn from a small alphabet so windows overlap often.
    pub fn arb_commit() -> impl Strategy<Value = CommitId> {
        (0u8..24).prop_map(|n| CommitId::new(format!("c{n:02}")))
    }

    /// A valid window: distinct commits, latest = newest, parent outside.
    pub fn arb_window() -> impl Strategy<Value = CommitWindow> {
        (prop::collection::hash_set(arb_commit(), 0..6), prop::option::of(arb_commit())).prop_map(
            |(set, parent)| {
                let mut commits: Vec<CommitId> = set.into_iter().collect();
                commits.sort();
                let parent = parent.filter(|p| !commits.contains(p)).unwrap_or_default();
                let latest = commits.first().cloned().unwrap_or_else(|| parent.clone());
                CommitWindow::new(commits, latest, parent).unwrap_or_default()
            },
        )
    }

    /// A list of windows, newest first.
    pub fn arb_windows(max: usize) -> impl Strategy<Value = Vec<CommitWindow>> {
        prop::collection::vec(arb_window(), 0..max)
    }
}

// ── Value helpers ───────────────────────────────────────────────────────────

pub fn commits(list: &[&str]) -> Vec<CommitId> {
    list.iter().map(|c| CommitId::new(*c)).collect()
}

/// Window with `list` as its commits (newest first) and the given parent.
///
/// Panics on invalid input; test code only.
#[allow(clippy::expect_used)]
pub fn window(list: &[&str], parent: &str) -> CommitWindow {
    let commits = commits(list);
    let latest = commits.first().cloned().unwrap_or_else(|| CommitId::new(parent));
    CommitWindow::new(commits, latest, CommitId::new(parent)).expect("valid test window")
}

// ── Event factory functions ─────────────────────────────────────────────────

pub fn job_created_event(id: &str) -> Event {
    Event::JobCreated { id: JobId::new(id), branch: None, created_at_ms: 1_000_000 }
}

pub fn branch_job_created_event(project: &str, branch: &str, primary: bool) -> Event {
    Event::JobCreated {
        id: JobId::new(format!("{project}/{branch}")),
        branch: Some(BranchInfo {
            project: project.to_string(),
            branch: branch.to_string(),
            primary,
        }),
        created_at_ms: 1_000_000,
    }
}

pub fn build_started_event(job: &str, number: u32) -> Event {
    let job = JobId::new(job);
    Event::BuildStarted {
        id: BuildId::of(&job, number),
        job,
        number,
        started_at_ms: 1_000_000 + u64::from(number),
    }
}

pub fn build_completed_event(build: &str) -> Event {
    Event::BuildCompleted { id: BuildId::new(build), completed_at_ms: 2_000_000 }
}

pub fn build_deleted_event(build: &str) -> Event {
    Event::BuildDeleted { id: BuildId::new(build) }
}

pub fn commits_recorded_event(build: &str, window: CommitWindow) -> Event {
    Event::CommitsRecorded { build: BuildId::new(build), window }
}

pub fn reference_resolved_event(build: &str, reference: Option<&str>) -> Event {
    let owner = BuildId::new(build);
    let pointer = match reference {
        Some(r) => ReferencePointer::to(owner, BuildId::new(r)),
        None => ReferencePointer::none(owner),
    };
    Event::ReferenceResolved { pointer }
}

/// Events for a completed build of `job` that recorded `window`.
pub fn completed_build_events(job: &str, number: u32, window: CommitWindow) -> Vec<Event> {
    let started = build_started_event(job, number);
    let id = started.build_id().cloned().unwrap_or_else(|| BuildId::new(""));
    vec![
        started,
        Event::BuildCompleted { id: id.clone(), completed_at_ms: 2_000_000 },
        Event::CommitsRecorded { build: id, window },
    ]
}
