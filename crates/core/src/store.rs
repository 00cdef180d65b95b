// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read interfaces the reference engine needs from the CI host.
//!
//! The engine never holds build records across traversal steps; it keeps
//! [`BuildId`]s and looks them up again, so a build deleted mid-search simply
//! reads as absent.

use crate::build::Build;
use crate::id::{BuildId, JobId};
use crate::reference::ReferencePointer;
use crate::window::CommitWindow;

/// Build/job history owned by the scheduler.
pub trait BuildStore {
    /// Look up a build; `None` signals an unknown or deleted build.
    fn lookup(&self, build: &BuildId) -> Option<&Build>;

    /// Builds of `job`, newest first.
    fn builds_of(&self, job: &JobId) -> Vec<BuildId>;

    /// Whether `job` is known to the store.
    fn has_job(&self, job: &JobId) -> bool;

    /// Commit window recorded for `build`, if any.
    fn commit_window(&self, build: &BuildId) -> Option<&CommitWindow>;

    /// Reference pointer recorded for `build`, if any.
    fn reference_pointer(&self, build: &BuildId) -> Option<&ReferencePointer>;

    /// The existing build of the same job that precedes `build`.
    fn previous_build(&self, build: &BuildId) -> Option<BuildId> {
        let job = self.lookup(build)?.job.clone();
        self.builds_of(&job).into_iter().skip_while(|b| b != build).nth(1)
    }
}

/// Multi-branch discovery.
pub trait BranchResolver {
    /// The primary-branch job for `job`, or `None` when `job` is not part of a
    /// multi-branch project or the project has no primary branch.
    fn primary_branch_job(&self, job: &JobId) -> Option<JobId>;
}
