// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rp_core::CommitId;

#[test]
fn create_job_rejects_duplicates() {
    let h = Harness::new();
    h.job("j");
    let err = h.engine.create_job(JobSpec::new("j")).unwrap_err();
    assert!(matches!(err, EngineError::JobExists(_)));
}

#[test]
fn create_branch_job_records_branch_info() {
    let h = Harness::new();
    let job = h.branch_job("p", "main", true);
    assert_eq!(job, "p/main");
    let branch = h.engine.read(|s| s.get_job("p/main").and_then(|j| j.branch.clone())).unwrap();
    assert_eq!(branch.project, "p");
    assert!(branch.primary);
}

#[test]
fn start_build_numbers_builds_sequentially() {
    let h = Harness::new();
    let job = h.job("j");
    assert_eq!(h.engine.start_build(&job).unwrap(), "j#1");
    assert_eq!(h.engine.start_build(&job).unwrap(), "j#2");
}

#[test]
fn start_build_of_unknown_job_fails() {
    let h = Harness::new();
    let err = h.engine.start_build(&JobId::new("nope")).unwrap_err();
    assert!(matches!(err, EngineError::UnknownJob(_)));
}

#[test]
fn build_numbers_continue_after_deletion() {
    let h = Harness::new();
    let job = h.job("j");
    let b1 = h.engine.start_build(&job).unwrap();
    h.engine.delete_build(&b1).unwrap();
    assert_eq!(h.engine.start_build(&job).unwrap(), "j#2");
}

#[tokio::test]
async fn complete_unknown_build_fails() {
    let h = Harness::new();
    let err = h.engine.complete_build(&BuildId::new("j#1"), &h.repo).await.unwrap_err();
    assert!(matches!(err, EngineError::UnknownBuild(_)));
}

#[tokio::test]
async fn complete_marks_build_completed() {
    let h = Harness::new();
    let job = h.job("j");
    h.commits(&["a"]);
    let (build, _) = h.build(&job).await;
    let completed = h.engine.read(|s| s.lookup(&build).map(|b| b.is_completed()));
    assert_eq!(completed, Some(true));
}

#[tokio::test]
async fn completing_twice_reuses_recorded_facts() {
    let h = Harness::new();
    let job = h.job("j");
    h.commits(&["a"]);
    h.build(&job).await;
    h.commits(&["b"]);
    let (b2, first) = h.build(&job).await;

    h.commits(&["c"]);
    let again = h.engine.complete_build(&b2, &h.repo).await.unwrap();
    assert_eq!(again.reference, first);
    assert_eq!(h.window(&b2).commits(), &[CommitId::new("b")]);
}

#[tokio::test]
async fn unreadable_repository_yields_no_reference() {
    let h = Harness::new();
    let job = h.job("j");
    h.commits(&["a"]);
    h.build(&job).await;

    h.repo.fail_head(true);
    let (b2, r) = h.build(&job).await;
    assert!(h.window(&b2).is_unresolved());
    assert_eq!(r, None);
}

#[tokio::test]
async fn delete_unknown_build_fails() {
    let h = Harness::new();
    let err = h.engine.delete_build(&BuildId::new("j#4")).unwrap_err();
    assert!(matches!(err, EngineError::UnknownBuild(_)));
}

#[tokio::test]
async fn deleted_reference_leaves_dangling_pointer() {
    let h = Harness::new();
    let job = h.job("j");
    h.commits(&["a"]);
    let (b1, _) = h.build(&job).await;
    h.commits(&["b"]);
    let (b2, _) = h.build(&job).await;

    h.engine.delete_build(&b1).unwrap();
    let pointer = h.engine.read(|s| s.reference_pointer(&b2).cloned()).unwrap();
    assert_eq!(pointer.reference, Some(b1.clone()));
    assert!(h.engine.read(|s| s.lookup(&b1).is_none()));
}

#[tokio::test]
async fn state_survives_reopen() {
    let h = Harness::new();
    let job = h.job("j");
    h.commits(&["a"]);
    let (b1, _) = h.build(&job).await;
    h.commits(&["b"]);
    let (b2, _) = h.build(&job).await;
    h.engine.checkpoint().unwrap();

    let store = Store::open(h.dir.path()).unwrap();
    let reopened = Engine::new(store, ReferenceConfig::default(), FakeClock::new());
    let pointer = reopened.read(|s| s.reference_pointer(&b2).cloned()).unwrap();
    assert_eq!(pointer.reference, Some(b1));
    assert_eq!(reopened.start_build(&job).unwrap(), "j#3");
}

#[tokio::test]
async fn builds_of_different_jobs_complete_concurrently() {
    let h = Harness::new();
    let a = h.job("a");
    let b = h.job("b");
    h.commits(&["x"]);
    let ba = h.engine.start_build(&a).unwrap();
    let bb = h.engine.start_build(&b).unwrap();

    let other = FakeRepository::new();
    other.commit("y");
    let (ra, rb) = tokio::join!(
        h.engine.complete_build(&ba, &h.repo),
        h.engine.complete_build(&bb, &other)
    );
    assert!(!ra.unwrap().has_reference());
    assert!(!rb.unwrap().has_reference());
    assert_eq!(h.window(&ba).latest_commit(), Some(&CommitId::new("x")));
    assert_eq!(h.window(&bb).latest_commit(), Some(&CommitId::new("y")));
}

#[tokio::test]
async fn late_completion_references_earlier_build() {
    let h = Harness::new();
    let job = h.job("j");
    h.commits(&["A"]);
    let (b1, _) = h.build(&job).await;

    h.repo.checkout_new_branch("two");
    h.commits(&["B"]);
    h.repo.checkout_new_branch("three");
    h.commits(&["C"]);
    let b2 = h.engine.start_build(&job).unwrap();
    let b3 = h.engine.start_build(&job).unwrap();

    let r3 = h.engine.complete_build(&b3, &h.repo).await.unwrap();
    assert_eq!(h.window(&b3), rp_core::test_support::window(&["C", "B"], "A"));
    assert_eq!(r3.reference, Some(b1.clone()));

    h.repo.checkout("two");
    let r2 = h.engine.complete_build(&b2, &h.repo).await.unwrap();
    assert_eq!(h.window(&b2), rp_core::test_support::window(&["B"], "A"));
    assert_eq!(r2.reference, Some(b1));
}

#[tokio::test]
async fn late_completion_never_falls_back_to_later_build() {
    let h = Harness::with_config(ReferenceConfig::default().latest_build_if_not_found(true));
    let job = h.job("j");
    h.commits(&["A"]);
    let b1 = h.engine.start_build(&job).unwrap();
    let b2 = h.engine.start_build(&job).unwrap();

    let r2 = h.engine.complete_build(&b2, &h.repo).await.unwrap();
    assert_eq!(r2.reference, None);
    let r1 = h.engine.complete_build(&b1, &h.repo).await.unwrap();
    assert_eq!(r1.reference, None);
}
