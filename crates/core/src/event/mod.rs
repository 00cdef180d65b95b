// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events recorded by the build store.
//!
//! Every state change is a fact appended to the WAL and folded into the
//! materialized state. Events are never rewritten; windows and reference
//! pointers are set once per build.

mod methods;

use crate::build::BranchInfo;
use crate::id::{BuildId, JobId};
use crate::reference::ReferencePointer;
use crate::window::CommitWindow;
use serde::{Deserialize, Serialize};

/// Events that trigger state transitions in the system.
///
/// Serializes with `{"type": "event:name", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "job:created")]
    JobCreated {
        id: JobId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        branch: Option<BranchInfo>,
        created_at_ms: u64,
    },

    #[serde(rename = "build:started")]
    BuildStarted { id: BuildId, job: JobId, number: u32, started_at_ms: u64 },

    #[serde(rename = "build:completed")]
    BuildCompleted { id: BuildId, completed_at_ms: u64 },

    #[serde(rename = "build:deleted")]
    BuildDeleted { id: BuildId },

    /// Commit window recorded for a completed build.
    #[serde(rename = "commits:recorded")]
    CommitsRecorded { build: BuildId, window: CommitWindow },

    /// Reference build chosen for a completed build.
    #[serde(rename = "reference:resolved")]
    ReferenceResolved { pointer: ReferencePointer },
}
