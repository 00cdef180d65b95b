// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::Harness;
use rp_core::test_support::window;
use rp_core::{CommitId, ReferenceConfig};

#[tokio::test]
async fn second_build_references_first() {
    let h = Harness::new();
    let job = h.job("J");
    h.commits(&["A"]);
    let (b1, r1) = h.build(&job).await;
    h.commits(&["B"]);
    let (b2, r2) = h.build(&job).await;

    assert_eq!(h.window(&b1), window(&["A"], ""));
    assert_eq!(h.window(&b2), window(&["B"], "A"));
    assert_eq!(r1, None);
    assert_eq!(r2, Some(b1));
}

#[tokio::test]
async fn noop_rebuild_references_first_build() {
    let h = Harness::new();
    let job = h.job("J");
    h.commits(&["A"]);
    let (b1, _) = h.build(&job).await;
    h.commits(&["B"]);
    h.build(&job).await;

    let (b3, r3) = h.build(&job).await;
    let w3 = h.window(&b3);
    assert!(w3.commits().is_empty());
    assert_eq!(w3.latest_commit(), Some(&CommitId::new("B")));
    assert_eq!(w3.parent_commit(), Some(&CommitId::new("A")));
    assert_eq!(r3, Some(b1));
}

#[tokio::test]
async fn feature_forked_after_master_build() {
    let h = Harness::new();
    let master = h.branch_job("p", "master", true);
    let feature = h.branch_job("p", "feature", false);
    h.commits(&["M"]);
    let (m1, _) = h.build(&master).await;

    h.repo.checkout_new_branch("feature");
    h.commits(&["C"]);
    let (f1, r) = h.build(&feature).await;
    assert_eq!(h.window(&f1), window(&["C", "M"], ""));
    assert_eq!(r, Some(m1));
}

async fn far_fork(config: ReferenceConfig) -> (Harness, Option<rp_core::BuildId>) {
    let h = Harness::with_config(config);
    let master = h.branch_job("p", "master", true);
    let feature = h.branch_job("p", "feature", false);
    h.commits(&["A"]);
    h.build(&master).await;
    h.repo.checkout_new_branch("feature");
    h.repo.checkout("master");
    h.commits(&["B"]);
    h.build(&master).await;

    h.repo.checkout("feature");
    h.commits(&["c1", "c2", "c3", "c4"]);
    let (_, r) = h.build(&feature).await;
    (h, r)
}

#[tokio::test]
async fn budget_too_small_for_fork_distance() {
    let (_, r) = far_fork(ReferenceConfig::default().max_commits(2)).await;
    assert_eq!(r, None);

    let (_, r) = far_fork(ReferenceConfig::default().max_commits(5)).await;
    assert_eq!(r.map(|b| b.to_string()).as_deref(), Some("p/master#1"));
}

#[tokio::test]
async fn budget_too_small_falls_back_to_newest_master_build() {
    let config = ReferenceConfig::default().max_commits(2).latest_build_if_not_found(true);
    let (_, r) = far_fork(config).await;
    assert_eq!(r.map(|b| b.to_string()).as_deref(), Some("p/master#2"));
}

#[tokio::test]
async fn deleted_candidate_is_excluded() {
    for (fallback, expected) in [(false, None), (true, Some("p/master#2"))] {
        let h =
            Harness::with_config(ReferenceConfig::default().latest_build_if_not_found(fallback));
        let master = h.branch_job("p", "master", true);
        let feature = h.branch_job("p", "feature", false);
        h.commits(&["A"]);
        let (m1, _) = h.build(&master).await;
        h.repo.checkout_new_branch("feature");
        h.repo.checkout("master");
        h.commits(&["B"]);
        h.build(&master).await;

        h.engine.delete_build(&m1).unwrap();
        h.repo.checkout("feature");
        h.commits(&["C"]);
        let (_, r) = h.build(&feature).await;
        assert_eq!(r.map(|b| b.to_string()).as_deref(), expected);
    }
}
