// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference build pointer attached to a build.

use crate::id::BuildId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The comparison baseline chosen for `owner`.
///
/// Set once when the owner completes. `reference` may later point at a
/// deleted build; that is an expected state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePointer {
    pub owner: BuildId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<BuildId>,
}

impl ReferencePointer {
    /// Pointer recording that no reference build was found.
    pub fn none(owner: BuildId) -> Self {
        Self { owner, reference: None }
    }

    pub fn to(owner: BuildId, reference: BuildId) -> Self {
        Self { owner, reference: Some(reference) }
    }

    pub fn reference_build(&self) -> Option<&BuildId> {
        self.reference.as_ref()
    }

    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }
}

impl fmt::Display for ReferencePointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reference {
            Some(r) => write!(f, "{} -> {}", self.owner, r),
            None => write!(f, "{} -> (no reference build)", self.owner),
        }
    }
}
