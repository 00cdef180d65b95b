// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read interfaces over the materialized state.

use rp_core::{
    BranchResolver, Build, BuildId, BuildStore, CommitWindow, JobId, ReferencePointer,
};

use super::MaterializedState;

impl BuildStore for MaterializedState {
    fn lookup(&self, build: &BuildId) -> Option<&Build> {
        self.builds.get(build)
    }

    fn builds_of(&self, job: &JobId) -> Vec<BuildId> {
        self.job_builds.get(job).map(|seq| seq.iter().rev().cloned().collect()).unwrap_or_default()
    }

    fn has_job(&self, job: &JobId) -> bool {
        self.jobs.contains_key(job)
    }

    fn commit_window(&self, build: &BuildId) -> Option<&CommitWindow> {
        if !self.builds.contains_key(build) {
            return None;
        }
        self.windows.get(build)
    }

    fn reference_pointer(&self, build: &BuildId) -> Option<&ReferencePointer> {
        self.references.get(build)
    }
}

impl BranchResolver for MaterializedState {
    fn primary_branch_job(&self, job: &JobId) -> Option<JobId> {
        let branch = self.jobs.get(job)?.branch.as_ref()?;
        if branch.primary {
            return Some(job.clone());
        }
        let mut primaries: Vec<&JobId> = self
            .jobs
            .values()
            .filter(|j| {
                j.branch.as_ref().is_some_and(|b| b.primary && b.project == branch.project)
            })
            .map(|j| &j.id)
            .collect();
        // Deterministic pick if a project was misconfigured with two primaries
        primaries.sort();
        primaries.first().map(|id| (*id).clone())
    }
}
