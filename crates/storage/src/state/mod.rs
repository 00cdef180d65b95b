// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state from WAL replay

mod builds;
mod queries;
mod records;

use rp_core::{Build, BuildId, CommitWindow, Event, Job, JobId, ReferencePointer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Materialized state built from WAL operations
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MaterializedState {
    pub jobs: HashMap<JobId, Job>,
    /// Live builds. Deleted builds are removed, so lookups read as absent.
    pub builds: HashMap<BuildId, Build>,
    /// Live build ids per job, oldest first (append order).
    #[serde(default)]
    pub job_builds: HashMap<JobId, Vec<BuildId>>,
    /// Commit window per build, set once.
    #[serde(default)]
    pub windows: HashMap<BuildId, CommitWindow>,
    /// Reference pointer per build, set once.
    #[serde(default)]
    pub references: HashMap<BuildId, ReferencePointer>,
}

impl MaterializedState {
    /// Apply an event to derive state changes.
    ///
    /// # Idempotency Requirement
    ///
    /// **All event handlers MUST be idempotent.** Replaying the WAL after a
    /// snapshot may apply an event the snapshot already contains. Handlers
    /// guard inserts with existence checks and never overwrite a window or a
    /// reference pointer once set.
    pub fn apply_event(&mut self, event: &Event) {
        match event {
            Event::JobCreated { .. }
            | Event::BuildStarted { .. }
            | Event::BuildCompleted { .. }
            | Event::BuildDeleted { .. } => builds::apply(self, event),

            Event::CommitsRecorded { .. } | Event::ReferenceResolved { .. } => {
                records::apply(self, event)
            }
        }
    }

    pub fn get_job(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    pub fn get_build(&self, id: &str) -> Option<&Build> {
        self.builds.get(id)
    }
}

#[cfg(test)]
#[path = "../state_tests/mod.rs"]
mod tests;
