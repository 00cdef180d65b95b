// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rp_core::test_support::*;
use rp_core::{BranchResolver, BuildStatus, BuildStore};

fn state_with(events: &[Event]) -> MaterializedState {
    let mut state = MaterializedState::default();
    for event in events {
        state.apply_event(event);
    }
    state
}

fn id(s: &str) -> BuildId {
    BuildId::new(s)
}

// --- jobs and builds ---

#[test]
fn build_started_registers_build_and_sequence() {
    let state = state_with(&[
        job_created_event("j"),
        build_started_event("j", 1),
        build_started_event("j", 2),
    ]);
    assert_eq!(state.builds_of(&JobId::new("j")), vec![id("j#2"), id("j#1")]);
    assert_eq!(state.lookup(&id("j#1")).map(|b| b.status), Some(BuildStatus::Running));
    assert_eq!(state.jobs["j"].last_build_number, 2);
}

#[test]
fn build_started_for_unknown_job_registers_job() {
    let state = state_with(&[build_started_event("adhoc", 1)]);
    assert!(state.has_job(&JobId::new("adhoc")));
    assert_eq!(state.get_job("adhoc").and_then(|j| j.branch.clone()), None);
}

#[test]
fn build_started_is_idempotent() {
    let state = state_with(&[build_started_event("j", 1), build_started_event("j", 1)]);
    assert_eq!(state.builds_of(&JobId::new("j")), vec![id("j#1")]);
}

#[test]
fn job_created_does_not_overwrite_existing_job() {
    let state = state_with(&[
        branch_job_created_event("p", "master", true),
        Event::JobCreated { id: JobId::new("p/master"), branch: None, created_at_ms: 5 },
    ]);
    assert!(state.jobs["p/master"].branch.is_some());
}

#[test]
fn build_completed_sets_status_once() {
    let state = state_with(&[
        build_started_event("j", 1),
        Event::BuildCompleted { id: id("j#1"), completed_at_ms: 10 },
        Event::BuildCompleted { id: id("j#1"), completed_at_ms: 20 },
    ]);
    let build = state.get_build("j#1").unwrap();
    assert!(build.is_completed());
    assert_eq!(build.completed_at_ms, Some(10));
}

#[test]
fn build_deleted_removes_build_and_records() {
    let mut events = completed_build_events("j", 1, window(&["a"], ""));
    events.push(reference_resolved_event("j#1", None));
    events.extend(completed_build_events("j", 2, window(&["b"], "a")));
    events.push(reference_resolved_event("j#2", Some("j#1")));
    events.push(build_deleted_event("j#1"));
    let state = state_with(&events);

    assert!(state.lookup(&id("j#1")).is_none());
    assert!(state.commit_window(&id("j#1")).is_none());
    assert!(state.reference_pointer(&id("j#1")).is_none());
    assert_eq!(state.builds_of(&JobId::new("j")), vec![id("j#2")]);
    // The surviving pointer dangles
    assert_eq!(
        state.reference_pointer(&id("j#2")).and_then(|p| p.reference_build()),
        Some(&id("j#1"))
    );
}

#[test]
fn previous_build_skips_deleted() {
    let state = state_with(&[
        build_started_event("j", 1),
        build_started_event("j", 2),
        build_started_event("j", 3),
        build_deleted_event("j#2"),
    ]);
    assert_eq!(state.previous_build(&id("j#3")), Some(id("j#1")));
    assert_eq!(state.previous_build(&id("j#1")), None);
    assert_eq!(state.previous_build(&id("j#2")), None);
}

// --- set-once records ---

#[test]
fn commits_recorded_is_set_once() {
    let mut events = completed_build_events("j", 1, window(&["a"], ""));
    events.push(commits_recorded_event("j#1", window(&["z"], "")));
    let state = state_with(&events);
    assert_eq!(state.commit_window(&id("j#1")), Some(&window(&["a"], "")));
}

#[test]
fn commits_recorded_for_unknown_build_is_ignored() {
    let state = state_with(&[commits_recorded_event("ghost#1", window(&["a"], ""))]);
    assert!(state.windows.is_empty());
}

#[test]
fn reference_resolved_is_set_once() {
    let mut events = completed_build_events("j", 1, window(&["a"], ""));
    events.push(reference_resolved_event("j#1", None));
    events.push(reference_resolved_event("j#1", Some("j#0")));
    let state = state_with(&events);
    assert!(!state.reference_pointer(&id("j#1")).unwrap().has_reference());
}

// --- branch discovery ---

#[yare::parameterized(
    feature_maps_to_primary = { "p/feature", Some("p/master") },
    primary_maps_to_itself  = { "p/master",  Some("p/master") },
    other_project_has_none  = { "q/feature", None },
    standalone_has_none     = { "nightly",   None },
    unknown_has_none        = { "missing",   None },
)]
fn primary_branch_job(job: &str, expected: Option<&str>) {
    let state = state_with(&[
        branch_job_created_event("p", "master", true),
        branch_job_created_event("p", "feature", false),
        branch_job_created_event("q", "feature", false),
        job_created_event("nightly"),
    ]);
    assert_eq!(state.primary_branch_job(&JobId::new(job)), expected.map(JobId::new));
}

#[test]
fn state_serde_roundtrip_preserves_records() {
    let mut events = completed_build_events("j", 1, window(&["b", "a"], ""));
    events.push(reference_resolved_event("j#1", None));
    let state = state_with(&events);
    let json = serde_json::to_string(&state).unwrap();
    let back: MaterializedState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.commit_window(&id("j#1")), state.commit_window(&id("j#1")));
    assert_eq!(back.builds_of(&JobId::new("j")), vec![id("j#1")]);
}
