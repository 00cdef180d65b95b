// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference build resolution for a completed build.

use crate::finder::{Intersection, IntersectionFinder};
use crate::index::BuildCommitIndex;
use rp_core::{BranchResolver, BuildId, BuildStore, JobId, ReferenceConfig, ReferencePointer};
use tracing::{info, warn};

/// Picks the target job and runs the finder for one build.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    config: ReferenceConfig,
    finder: IntersectionFinder,
}

impl ReferenceResolver {
    pub fn new(config: ReferenceConfig) -> Self {
        let finder = IntersectionFinder::new(config.policy());
        Self { config, finder }
    }

    pub fn config(&self) -> &ReferenceConfig {
        &self.config
    }

    /// Job whose builds are searched for `job`'s builds.
    ///
    /// The configured reference job wins when the store knows it; otherwise
    /// the primary branch of a multi-branch project; otherwise `job` itself.
    pub fn target_job<S>(&self, store: &S, job: &JobId) -> JobId
    where
        S: BuildStore + BranchResolver + ?Sized,
    {
        if let Some(configured) = self.config.target_job() {
            if store.has_job(&configured) {
                return configured;
            }
            warn!(
                job = %job,
                reference_job = %configured,
                "reference job not found, using own job"
            );
            return job.clone();
        }
        store.primary_branch_job(job).unwrap_or_else(|| job.clone())
    }

    /// Resolve the reference pointer for `build`. Never fails.
    pub fn resolve<S>(&self, store: &S, build: &BuildId) -> ReferencePointer
    where
        S: BuildStore + BranchResolver + ?Sized,
    {
        let Some(job) = store.lookup(build).map(|b| b.job.clone()) else {
            warn!(build = %build, "unknown build, no reference");
            return ReferencePointer::none(build.clone());
        };

        let index = BuildCommitIndex::new(store);
        let target = self.target_job(store, &job);
        let history = index.history_of(build, self.finder.policy().max_commits);
        // Within its own job a build only looks back, even when a later
        // build completed first.
        let targets = if target == job {
            index.earlier_builds(build)
        } else {
            index.builds_of(&target)
        };

        let outcome = self.finder.find(build, &history, &targets, &index);
        info!(
            build = %build,
            target = %target,
            history = history.len(),
            candidates = targets.len(),
            "{}",
            outcome
        );

        match outcome {
            Intersection::Found { build: reference, .. }
            | Intersection::Fallback { build: reference } => {
                ReferencePointer::to(build.clone(), reference)
            }
            Intersection::NotFound => ReferencePointer::none(build.clone()),
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
