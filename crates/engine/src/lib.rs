// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rp-engine: commit recording and reference build resolution

mod completion;
mod error;
mod finder;
mod index;
mod recorder;
mod resolver;

pub use completion::Engine;
pub use error::EngineError;
pub use finder::{Intersection, IntersectionFinder};
pub use index::BuildCommitIndex;
pub use recorder::CommitRecorder;
pub use resolver::ReferenceResolver;
