// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier newtypes for jobs, builds, and commits.

/// Returns a string slice truncated to at most `n` characters.
pub fn short(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(i, _)| &s[..i])
}

/// Define a newtype ID wrapper around `SmolStr`.
///
/// Generates `new()`, `as_str()`, `short()`, `is_empty()`, `Display`,
/// `From<String>`, `From<&str>`, `PartialEq<str>`, `PartialEq<&str>`,
/// `Borrow<str>`, and `Deref` implementations. IDs are opaque: they are
/// compared for equality only and never generated randomly, since every ID in
/// this system is handed to us by the CI host or the repository.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct JobId;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub smol_str::SmolStr);

        impl $name {
            pub fn new(id: impl Into<smol_str::SmolStr>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns a string slice truncated to at most `n` characters.
            pub fn short(&self, n: usize) -> &str {
                $crate::id::short(&self.0, n)
            }

            /// Returns true if the ID is an empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                Self::new(s.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }
    };
}

crate::define_id! {
    /// Full name of a job, e.g. `"p/master"` for the `master` branch of the
    /// multi-branch project `p`, or `"nightly"` for a standalone job.
    pub struct JobId;
}

crate::define_id! {
    /// Stable, externalizable build identifier: `"<job>#<number>"`.
    ///
    /// Stays a valid value after the build itself has been deleted; lookups
    /// through the store then return absent.
    pub struct BuildId;
}

crate::define_id! {
    /// Version-control commit identifier (e.g. a 40-hex sha). Empty means "none".
    pub struct CommitId;
}

impl BuildId {
    /// Build the externalizable id for build `number` of `job`.
    pub fn of(job: &JobId, number: u32) -> Self {
        Self::new(format!("{}#{}", job, number))
    }

    /// Job part of the id, if the id has the `"<job>#<number>"` shape.
    pub fn job(&self) -> Option<JobId> {
        self.0.rsplit_once('#').map(|(job, _)| JobId::new(job))
    }

    /// Build number part of the id, if the id has the `"<job>#<number>"` shape.
    pub fn number(&self) -> Option<u32> {
        self.0.rsplit_once('#').and_then(|(_, n)| n.parse().ok())
    }
}

impl CommitId {
    /// The "no commit" sentinel.
    pub fn none() -> Self {
        Self::new("")
    }

    /// `None` for the empty sentinel.
    pub fn non_empty(&self) -> Option<&CommitId> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl Default for CommitId {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
