// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event name, log summary and build lookup

use super::Event;
use crate::id::{self, BuildId};

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::JobCreated { .. } => "job:created",
            Event::BuildStarted { .. } => "build:started",
            Event::BuildCompleted { .. } => "build:completed",
            Event::BuildDeleted { .. } => "build:deleted",
            Event::CommitsRecorded { .. } => "commits:recorded",
            Event::ReferenceResolved { .. } => "reference:resolved",
        }
    }

    /// One-line summary for logs: the event name followed by key fields.
    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::JobCreated { id, branch: Some(b), .. } => {
                let primary = if b.primary { " primary" } else { "" };
                format!("{t} job={id} project={} branch={}{primary}", b.project, b.branch)
            }
            Event::JobCreated { id, branch: None, .. } => format!("{t} job={id}"),
            Event::BuildStarted { id, .. } => format!("{t} build={id}"),
            Event::BuildCompleted { id, .. } => format!("{t} build={id}"),
            Event::BuildDeleted { id } => format!("{t} build={id}"),
            Event::CommitsRecorded { build, window } => match window.latest_commit() {
                Some(head) => format!(
                    "{t} build={build} commits={} head={}",
                    window.len(),
                    id::short(head, 8)
                ),
                None => format!("{t} build={build} commits=0 head=-"),
            },
            Event::ReferenceResolved { pointer } => match &pointer.reference {
                Some(r) => format!("{t} build={} reference={r}", pointer.owner),
                None => format!("{t} build={} reference=-", pointer.owner),
            },
        }
    }

    /// Build the event is about, if any.
    pub fn build_id(&self) -> Option<&BuildId> {
        match self {
            Event::BuildStarted { id, .. }
            | Event::BuildCompleted { id, .. }
            | Event::BuildDeleted { id } => Some(id),
            Event::CommitsRecorded { build, .. } => Some(build),
            Event::ReferenceResolved { pointer } => Some(&pointer.owner),
            Event::JobCreated { .. } => None,
        }
    }
}
