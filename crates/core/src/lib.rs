// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rp-core: domain types for reference build resolution

pub mod macros;

pub mod build;
pub mod clock;
pub mod config;
pub mod event;
pub mod id;
pub mod reference;
pub mod store;
pub mod window;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use build::{BranchInfo, Build, BuildStatus, Job, JobSpec};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{
    ConfigError, ReferenceConfig, ReferencePolicy, DEFAULT_MAX_COMMITS,
    DEFAULT_MAX_RECORDED_COMMITS,
};
pub use event::Event;
pub use id::{short, BuildId, CommitId, JobId};
pub use reference::ReferencePointer;
pub use store::{BranchResolver, BuildStore};
pub use window::{CommitWindow, WindowError};
