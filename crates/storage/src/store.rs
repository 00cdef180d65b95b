// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable event store: snapshot + WAL + materialized state.
//!
//! Every event is appended to the WAL and flushed before it is applied,
//! so the in-memory state never runs ahead of what is on disk.

use crate::snapshot::{Snapshot, SnapshotError};
use crate::state::MaterializedState;
use crate::wal::{Wal, WalError};
use rp_core::Event;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const WAL_FILE: &str = "events.wal";
const SNAPSHOT_FILE: &str = "snapshot.zst";

/// Events applied since the last snapshot that trigger a checkpoint.
const CHECKPOINT_INTERVAL: u64 = 1000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("wal: {0}")]
    Wal(#[from] WalError),
    #[error("snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

pub struct Store {
    dir: PathBuf,
    wal: Wal,
    state: MaterializedState,
    snapshot_seq: u64,
}

impl Store {
    /// Open the store in `dir`, recovering state from snapshot and WAL.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(dir).map_err(WalError::from)?;

        let (mut state, processed_seq) = match Snapshot::load(&dir.join(SNAPSHOT_FILE))? {
            Some(snapshot) => {
                debug!(seq = snapshot.seq, builds = snapshot.state.builds.len(), "loaded snapshot");
                (snapshot.state, snapshot.seq)
            }
            None => (MaterializedState::default(), 0),
        };

        let wal = Wal::open(&dir.join(WAL_FILE), processed_seq)?;
        let replay = wal.entries_after(processed_seq)?;
        let replayed = replay.len();
        for entry in replay {
            state.apply_event(&entry.event);
        }
        if replayed > 0 {
            debug!(replayed, after = processed_seq, "replayed WAL");
        }

        Ok(Self { dir: dir.to_path_buf(), wal, state, snapshot_seq: processed_seq })
    }

    /// Persist `event`, then fold it into state. Returns its sequence number.
    pub fn apply(&mut self, event: Event) -> Result<u64, StoreError> {
        let seq = self.wal.append(&event)?;
        if let Err(e) = self.wal.flush() {
            if let Err(discard) = self.wal.discard_pending() {
                warn!(seq, error = %discard, "failed to discard unflushed WAL entry");
            }
            return Err(e.into());
        }
        debug!(seq, "{}", event.log_summary());
        self.state.apply_event(&event);

        if seq.saturating_sub(self.snapshot_seq) >= CHECKPOINT_INTERVAL {
            self.checkpoint()?;
        }
        Ok(seq)
    }

    pub fn state(&self) -> &MaterializedState {
        &self.state
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a snapshot of the current state and drop the WAL entries it covers.
    pub fn checkpoint(&mut self) -> Result<u64, StoreError> {
        self.wal.flush()?;
        let seq = self.wal.write_seq();
        Snapshot::new(seq, self.state.clone()).save(&self.dir.join(SNAPSHOT_FILE))?;
        self.wal.truncate_before(seq + 1)?;
        self.snapshot_seq = seq;
        info!(seq, "checkpoint written");
        Ok(seq)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
