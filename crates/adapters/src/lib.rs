// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rp-adapters: version-control access for commit recording

pub mod subprocess;
pub mod vcs;

pub use subprocess::SubprocessError;
pub use vcs::{CommitWalk, GitCli, Repository, VcsError};

#[cfg(any(test, feature = "test-support"))]
pub use vcs::{FakeRepository, LogCall};
