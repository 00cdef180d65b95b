// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job and build records as kept by the build store.

use crate::id::{BuildId, JobId};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Running,
    Completed,
}

crate::simple_display! {
    BuildStatus {
        Running => "running",
        Completed => "completed",
    }
}

/// One execution of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub id: BuildId,
    pub job: JobId,
    pub number: u32,
    pub status: BuildStatus,
    pub started_at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at_ms: Option<u64>,
}

impl Build {
    pub fn is_completed(&self) -> bool {
        self.status == BuildStatus::Completed
    }
}

/// Multi-branch membership of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInfo {
    /// Multi-branch project the job belongs to.
    pub project: String,
    /// Branch name, e.g. `"feature"`.
    pub branch: String,
    /// Whether this branch is the project's primary branch.
    #[serde(default)]
    pub primary: bool,
}

/// A job: a named, ordered sequence of builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchInfo>,
    pub created_at_ms: u64,
    /// Number handed to the most recently started build.
    #[serde(default)]
    pub last_build_number: u32,
}

/// Parameters for registering a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub id: JobId,
    pub project: Option<String>,
    pub branch: Option<String>,
    pub primary: bool,
}

impl JobSpec {
    pub fn new(id: impl Into<JobId>) -> Self {
        Self { id: id.into(), project: None, branch: None, primary: false }
    }

    /// Spec for branch `branch` of multi-branch project `project`, named
    /// `"<project>/<branch>"`.
    pub fn branch_of(project: &str, branch: &str) -> Self {
        Self::new(format!("{}/{}", project, branch)).project(project).branch(branch)
    }

    crate::setters! {
        set {
            primary: bool,
        }
        option {
            project: String,
            branch: String,
        }
    }

    /// Branch info when both project and branch are set.
    pub fn branch_info(&self) -> Option<BranchInfo> {
        match (&self.project, &self.branch) {
            (Some(project), Some(branch)) => Some(BranchInfo {
                project: project.clone(),
                branch: branch.clone(),
                primary: self.primary,
            }),
            _ => None,
        }
    }
}
