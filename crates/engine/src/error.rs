// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use rp_core::{BuildId, JobId};
use rp_storage::StoreError;
use thiserror::Error;

/// Errors surfaced by the build lifecycle API.
///
/// Reference resolution itself never fails; these cover the host side.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("unknown job: {0}")]
    UnknownJob(JobId),
    #[error("job already exists: {0}")]
    JobExists(JobId),
    #[error("unknown build: {0}")]
    UnknownBuild(BuildId),
}
