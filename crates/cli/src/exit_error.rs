// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use rp_engine::EngineError;
use std::fmt;

/// Exit code for an unknown job or build.
pub const NOT_FOUND: i32 = 3;

/// Exit code for invalid configuration.
pub const BAD_CONFIG: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(NOT_FOUND, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Map lifecycle errors onto exit codes; storage failures stay generic.
pub fn from_engine(err: EngineError) -> anyhow::Error {
    match err {
        EngineError::UnknownJob(_) | EngineError::UnknownBuild(_) => {
            ExitError::not_found(err.to_string()).into()
        }
        EngineError::JobExists(_) => ExitError::new(1, err.to_string()).into(),
        EngineError::Store(_) => anyhow::Error::new(err),
    }
}
