// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rp_adapters::FakeRepository;
use rp_core::{FakeClock, JobSpec};
use tempfile::TempDir;

mod lifecycle;
mod multibranch;
mod scenarios;
mod single_job;

/// Engine over a fresh on-disk store, with one shared fake repository.
struct Harness {
    dir: TempDir,
    engine: Engine<FakeClock>,
    repo: FakeRepository,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(ReferenceConfig::default())
    }

    fn with_config(config: ReferenceConfig) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        Self {
            engine: Engine::new(store, config, FakeClock::new()),
            dir,
            repo: FakeRepository::new(),
        }
    }

    fn job(&self, name: &str) -> JobId {
        self.engine.create_job(JobSpec::new(name)).unwrap()
    }

    fn branch_job(&self, project: &str, branch: &str, primary: bool) -> JobId {
        self.engine.create_job(JobSpec::branch_of(project, branch).primary(primary)).unwrap()
    }

    /// Start and complete the next build of `job`; returns it with its reference.
    async fn build(&self, job: &JobId) -> (BuildId, Option<BuildId>) {
        let build = self.engine.start_build(job).unwrap();
        let pointer = self.engine.complete_build(&build, &self.repo).await.unwrap();
        assert_eq!(pointer.owner, build);
        (build, pointer.reference)
    }

    fn window(&self, build: &BuildId) -> CommitWindow {
        self.engine.read(|state| state.commit_window(build).cloned()).unwrap()
    }

    fn commits(&self, ids: &[&str]) {
        for id in ids {
            self.repo.commit(id);
        }
    }
}
