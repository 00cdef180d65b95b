// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commit window and reference pointer handlers (set once per build).

use rp_core::Event;

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::CommitsRecorded { build, window } => {
            if !state.builds.contains_key(build) {
                tracing::warn!(build = %build, "commits recorded for unknown build");
                return;
            }
            if state.windows.contains_key(build) {
                return;
            }
            state.windows.insert(build.clone(), window.clone());
        }

        Event::ReferenceResolved { pointer } => {
            if !state.builds.contains_key(&pointer.owner) {
                tracing::warn!(build = %pointer.owner, "reference resolved for unknown build");
                return;
            }
            if state.references.contains_key(&pointer.owner) {
                return;
            }
            state.references.insert(pointer.owner.clone(), pointer.clone());
        }

        _ => {}
    }
}
