// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job and build lifecycle event handlers.

use rp_core::{Build, BuildStatus, Event, Job};

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::JobCreated { id, branch, created_at_ms } => {
            if !state.jobs.contains_key(id) {
                state.jobs.insert(
                    id.clone(),
                    Job {
                        id: id.clone(),
                        branch: branch.clone(),
                        created_at_ms: *created_at_ms,
                        last_build_number: 0,
                    },
                );
            }
        }

        Event::BuildStarted { id, job, number, started_at_ms } => {
            // A build for an unregistered job registers the job implicitly
            let job_record = state.jobs.entry(job.clone()).or_insert_with(|| Job {
                id: job.clone(),
                branch: None,
                created_at_ms: *started_at_ms,
                last_build_number: 0,
            });
            job_record.last_build_number = job_record.last_build_number.max(*number);

            if state.builds.contains_key(id) {
                return;
            }
            state.builds.insert(
                id.clone(),
                Build {
                    id: id.clone(),
                    job: job.clone(),
                    number: *number,
                    status: BuildStatus::Running,
                    started_at_ms: *started_at_ms,
                    completed_at_ms: None,
                },
            );
            let sequence = state.job_builds.entry(job.clone()).or_default();
            if !sequence.contains(id) {
                sequence.push(id.clone());
            }
        }

        Event::BuildCompleted { id, completed_at_ms } => {
            if let Some(build) = state.builds.get_mut(id) {
                if build.status != BuildStatus::Completed {
                    build.status = BuildStatus::Completed;
                    build.completed_at_ms = Some(*completed_at_ms);
                }
            }
        }

        Event::BuildDeleted { id } => {
            if let Some(build) = state.builds.remove(id) {
                if let Some(sequence) = state.job_builds.get_mut(&build.job) {
                    sequence.retain(|b| b != id);
                }
            }
            // Records of a deleted build go with it; pointers held by other
            // builds keep the id and now dangle.
            state.windows.remove(id);
            state.references.remove(id);
        }

        _ => {}
    }
}
