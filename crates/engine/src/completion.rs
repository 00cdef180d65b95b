// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build lifecycle: job creation, build start/completion/deletion.
//!
//! Completion records the build's commit window and resolves its reference
//! pointer. The store lock is never held across the repository walk, so
//! builds of different jobs can complete concurrently.

use crate::error::EngineError;
use crate::index::BuildCommitIndex;
use crate::recorder::CommitRecorder;
use crate::resolver::ReferenceResolver;
use parking_lot::Mutex;
use rp_adapters::Repository;
use rp_core::{
    BuildId, BuildStore, Clock, CommitWindow, Event, JobId, JobSpec, ReferenceConfig,
    ReferencePointer,
};
use rp_storage::{MaterializedState, Store};
use std::sync::Arc;
use tracing::info;

pub struct Engine<C: Clock> {
    store: Arc<Mutex<Store>>,
    resolver: ReferenceResolver,
    recorder: CommitRecorder,
    clock: C,
}

impl<C: Clock> Engine<C> {
    pub fn new(store: Store, config: ReferenceConfig, clock: C) -> Self {
        Self::with_store(Arc::new(Mutex::new(store)), config, clock)
    }

    /// Build an engine over a store shared with other engines.
    pub fn with_store(store: Arc<Mutex<Store>>, config: ReferenceConfig, clock: C) -> Self {
        let recorder = CommitRecorder::new(config.max_recorded_commits);
        Self { store, resolver: ReferenceResolver::new(config), recorder, clock }
    }

    pub fn config(&self) -> &ReferenceConfig {
        self.resolver.config()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run `f` against the current state under the store lock.
    pub fn read<T>(&self, f: impl FnOnce(&MaterializedState) -> T) -> T {
        f(self.store.lock().state())
    }

    /// Write a snapshot and truncate the WAL.
    pub fn checkpoint(&self) -> Result<u64, EngineError> {
        Ok(self.store.lock().checkpoint()?)
    }

    pub fn create_job(&self, spec: JobSpec) -> Result<JobId, EngineError> {
        let mut store = self.store.lock();
        if store.state().has_job(&spec.id) {
            return Err(EngineError::JobExists(spec.id));
        }
        let branch = spec.branch_info();
        store.apply(Event::JobCreated {
            id: spec.id.clone(),
            branch,
            created_at_ms: self.clock.epoch_ms(),
        })?;
        Ok(spec.id)
    }

    /// Start the next build of `job`.
    pub fn start_build(&self, job: &JobId) -> Result<BuildId, EngineError> {
        let mut store = self.store.lock();
        let number = match store.state().get_job(job) {
            Some(record) => record.last_build_number + 1,
            None => return Err(EngineError::UnknownJob(job.clone())),
        };
        let id = BuildId::of(job, number);
        store.apply(Event::BuildStarted {
            id: id.clone(),
            job: job.clone(),
            number,
            started_at_ms: self.clock.epoch_ms(),
        })?;
        Ok(id)
    }

    /// Complete `build`: record its commits from `repo` and resolve its
    /// reference. Safe to call again; recorded facts are reused.
    pub async fn complete_build<R: Repository + ?Sized>(
        &self,
        build: &BuildId,
        repo: &R,
    ) -> Result<ReferencePointer, EngineError> {
        let pending = {
            let mut store = self.store.lock();
            let completed = match store.state().lookup(build) {
                Some(record) => record.is_completed(),
                None => return Err(EngineError::UnknownBuild(build.clone())),
            };
            if !completed {
                store.apply(Event::BuildCompleted {
                    id: build.clone(),
                    completed_at_ms: self.clock.epoch_ms(),
                })?;
            }
            let state = store.state();
            if state.commit_window(build).is_some() {
                None
            } else {
                let index = BuildCommitIndex::new(state);
                let frontier = index.frontier(build, self.recorder.cap());
                Some((frontier, index.previous_window(build).cloned()))
            }
        };

        if let Some((frontier, previous)) = pending {
            let window: CommitWindow =
                self.recorder.record(repo, &frontier, previous.as_ref()).await;
            let mut store = self.store.lock();
            if store.state().lookup(build).is_none() {
                return Err(EngineError::UnknownBuild(build.clone()));
            }
            store.apply(Event::CommitsRecorded { build: build.clone(), window })?;
        }

        let mut store = self.store.lock();
        if let Some(existing) = store.state().reference_pointer(build) {
            return Ok(existing.clone());
        }
        let pointer = self.resolver.resolve(store.state(), build);
        store.apply(Event::ReferenceResolved { pointer: pointer.clone() })?;
        info!(build = %build, "{}", pointer);
        Ok(pointer)
    }

    pub fn delete_build(&self, build: &BuildId) -> Result<(), EngineError> {
        let mut store = self.store.lock();
        if store.state().lookup(build).is_none() {
            return Err(EngineError::UnknownBuild(build.clone()));
        }
        store.apply(Event::BuildDeleted { id: build.clone() })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "completion_tests/mod.rs"]
mod tests;
