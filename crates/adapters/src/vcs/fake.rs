// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Repository, VcsError};
use async_trait::async_trait;
use parking_lot::Mutex;
use rp_core::CommitId;
use std::collections::HashMap;
use std::sync::Arc;

/// Recorded `log` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCall {
    pub from: CommitId,
    pub skip: usize,
    pub limit: usize,
}

struct FakeRepoState {
    /// commit -> parent (first parent only)
    parents: HashMap<CommitId, Option<CommitId>>,
    /// branch -> tip
    branches: HashMap<String, Option<CommitId>>,
    current: String,
    fail_head: bool,
    fail_log: bool,
    log_calls: Vec<LogCall>,
}

/// In-memory repository with linear branches, for tests.
///
/// Commits are named by the caller so assertions read naturally.
#[derive(Clone)]
pub struct FakeRepository {
    inner: Arc<Mutex<FakeRepoState>>,
}

impl Default for FakeRepository {
    fn default() -> Self {
        let mut branches = HashMap::new();
        branches.insert("master".to_string(), None);
        Self {
            inner: Arc::new(Mutex::new(FakeRepoState {
                parents: HashMap::new(),
                branches,
                current: "master".to_string(),
                fail_head: false,
                fail_log: false,
                log_calls: Vec::new(),
            })),
        }
    }
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add commit `id` on top of the current branch and advance it.
    pub fn commit(&self, id: &str) -> CommitId {
        let mut state = self.inner.lock();
        let commit = CommitId::new(id);
        let current = state.current.clone();
        let parent = state.branches.get(&current).cloned().flatten();
        state.parents.insert(commit.clone(), parent);
        state.branches.insert(current, Some(commit.clone()));
        commit
    }

    /// Switch to an existing branch.
    pub fn checkout(&self, branch: &str) {
        let mut state = self.inner.lock();
        if state.branches.contains_key(branch) {
            state.current = branch.to_string();
        }
    }

    /// Create `branch` at the current tip and switch to it.
    pub fn checkout_new_branch(&self, branch: &str) {
        let mut state = self.inner.lock();
        let tip = state.branches.get(&state.current).cloned().flatten();
        state.branches.insert(branch.to_string(), tip);
        state.current = branch.to_string();
    }

    /// Tip of `branch`, if it has commits.
    pub fn tip(&self, branch: &str) -> Option<CommitId> {
        self.inner.lock().branches.get(branch).cloned().flatten()
    }

    /// Make `head_commit` fail.
    pub fn fail_head(&self, fail: bool) {
        self.inner.lock().fail_head = fail;
    }

    /// Make `log` fail.
    pub fn fail_log(&self, fail: bool) {
        self.inner.lock().fail_log = fail;
    }

    pub fn log_calls(&self) -> Vec<LogCall> {
        self.inner.lock().log_calls.clone()
    }
}

#[async_trait]
impl Repository for FakeRepository {
    async fn head_commit(&self) -> Result<CommitId, VcsError> {
        let state = self.inner.lock();
        if state.fail_head {
            return Err(VcsError::NoHead);
        }
        state.branches.get(&state.current).cloned().flatten().ok_or(VcsError::NoHead)
    }

    async fn log(
        &self,
        from: &CommitId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<CommitId>, VcsError> {
        let mut state = self.inner.lock();
        state.log_calls.push(LogCall { from: from.clone(), skip, limit });
        if state.fail_log {
            return Err(VcsError::CommandFailed {
                command: "log".to_string(),
                stderr: "injected failure".to_string(),
            });
        }
        if !state.parents.contains_key(from) {
            return Err(VcsError::UnknownCommit(from.clone()));
        }

        let mut out = Vec::new();
        let mut cursor = Some(from.clone());
        let mut index = 0;
        while let Some(commit) = cursor {
            if out.len() >= limit {
                break;
            }
            cursor = state.parents.get(&commit).cloned().flatten();
            if index >= skip {
                out.push(commit);
            }
            index += 1;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
