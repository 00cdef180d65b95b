// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

// --- define_id! macro tests ---

crate::define_id! {
    /// Test ID type for macro verification.
    pub struct TestId;
}

#[test]
fn define_id_hash_map_lookup() {
    let mut map = HashMap::new();
    map.insert(TestId::new("k"), 42);
    assert_eq!(map.get("k"), Some(&42));
}

#[test]
fn define_id_serializes_transparently() {
    let id = TestId::new("abc");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    let back: TestId = serde_json::from_str("\"abc\"").unwrap();
    assert_eq!(back, id);
}

#[yare::parameterized(
    truncates      = { "abcdefghijklmnop", 8, "abcdefgh" },
    shorter        = { "abc",              8, "abc" },
    exact          = { "abcdefgh",         8, "abcdefgh" },
    multibyte      = { "aéééé",            3, "aéé" },
    multibyte_fits = { "aéé",              3, "aéé" },
    empty          = { "",                 8, "" },
)]
fn define_id_short(input: &str, n: usize, expected: &str) {
    assert_eq!(TestId::new(input).short(n), expected);
    assert_eq!(short(input, n), expected);
}

// --- BuildId ---

#[test]
fn build_id_of_formats_job_and_number() {
    let id = BuildId::of(&JobId::new("p/master"), 3);
    assert_eq!(id, "p/master#3");
    assert_eq!(id.job(), Some(JobId::new("p/master")));
    assert_eq!(id.number(), Some(3));
}

#[test]
fn build_id_job_uses_last_separator() {
    let id = BuildId::new("weird#name#12");
    assert_eq!(id.job(), Some(JobId::new("weird#name")));
    assert_eq!(id.number(), Some(12));
}

#[test]
fn build_id_without_separator_is_opaque() {
    let id = BuildId::new("opaque");
    assert_eq!(id.job(), None);
    assert_eq!(id.number(), None);
}

// --- CommitId ---

#[test]
fn commit_id_none_is_empty() {
    assert!(CommitId::none().is_empty());
    assert_eq!(CommitId::none().non_empty(), None);
    assert_eq!(CommitId::default(), CommitId::none());
}

#[test]
fn commit_id_non_empty_passes_through() {
    let c = CommitId::new("a1b2c3");
    assert_eq!(c.non_empty(), Some(&c));
}
