// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn ids(list: &[&str]) -> Vec<CommitId> {
    list.iter().map(|s| CommitId::new(*s)).collect()
}

#[test]
fn new_accepts_valid_window() {
    let w = CommitWindow::new(ids(&["c", "b"]), CommitId::new("c"), CommitId::new("a")).unwrap();
    assert_eq!(w.len(), 2);
    assert_eq!(w.latest_commit(), Some(&CommitId::new("c")));
    assert_eq!(w.parent_commit(), Some(&CommitId::new("a")));
    assert!(w.contains(&CommitId::new("b")));
    assert_eq!(w.position(&CommitId::new("b")), Some(1));
}

#[test]
fn new_rejects_duplicate_commit() {
    let err = CommitWindow::new(ids(&["c", "b", "c"]), CommitId::new("c"), CommitId::none())
        .unwrap_err();
    assert_eq!(err, WindowError::DuplicateCommit(CommitId::new("c")));
}

#[test]
fn new_rejects_parent_inside_commits() {
    let err =
        CommitWindow::new(ids(&["c", "b"]), CommitId::new("c"), CommitId::new("b")).unwrap_err();
    assert_eq!(err, WindowError::ParentInCommits(CommitId::new("b")));
}

#[test]
fn new_rejects_latest_mismatch() {
    let err = CommitWindow::new(ids(&["c"]), CommitId::new("x"), CommitId::none()).unwrap_err();
    assert!(matches!(err, WindowError::LatestMismatch { .. }));
}

#[test]
fn empty_window_is_unresolved() {
    let w = CommitWindow::empty();
    assert!(w.is_empty());
    assert!(w.is_unresolved());
    assert_eq!(w.latest_commit(), None);
    assert_eq!(w.parent_commit(), None);
}

#[test]
fn unchanged_window_keeps_head_as_latest_and_parent() {
    let w = CommitWindow::unchanged(CommitId::new("h"));
    assert!(w.is_empty());
    assert!(!w.is_unresolved());
    assert_eq!(w.latest_commit(), Some(&CommitId::new("h")));
    assert_eq!(w.parent_commit(), Some(&CommitId::new("h")));
}

#[test]
fn deserialize_validates_invariants() {
    let json = r#"{"commits":["a","a"],"latest_commit":"a","parent_commit":""}"#;
    assert!(serde_json::from_str::<CommitWindow>(json).is_err());
}

#[test]
fn serde_roundtrip_keeps_fields() {
    let w = CommitWindow::new(ids(&["b"]), CommitId::new("b"), CommitId::new("a")).unwrap();
    let json = serde_json::to_string(&w).unwrap();
    assert_eq!(json, r#"{"commits":["b"],"latest_commit":"b","parent_commit":"a"}"#);
    assert_eq!(serde_json::from_str::<CommitWindow>(&json).unwrap(), w);
}
