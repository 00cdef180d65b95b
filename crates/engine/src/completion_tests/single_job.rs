// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One job building whatever branch is checked out.

use super::Harness;
use rp_core::test_support::window;
use rp_core::CommitId;

#[tokio::test]
async fn linear_history() {
    let h = Harness::new();
    let job = h.job("single");
    h.commits(&["init"]);

    let (b1, r1) = h.build(&job).await;
    assert_eq!(h.window(&b1), window(&["init"], ""));
    assert_eq!(r1, None);

    h.commits(&["second"]);
    let (b2, r2) = h.build(&job).await;
    assert_eq!(h.window(&b2), window(&["second"], "init"));
    assert_eq!(r2, Some(b1.clone()));

    // rebuild without new commits keeps the previous build's parent
    let (b3, r3) = h.build(&job).await;
    let w3 = h.window(&b3);
    assert!(w3.is_empty());
    assert_eq!(w3.latest_commit(), Some(&CommitId::new("second")));
    assert_eq!(w3.parent_commit(), Some(&CommitId::new("init")));
    assert_eq!(r3, Some(b1));
}

#[tokio::test]
async fn repeated_rebuilds_reference_build_before_last_change() {
    let h = Harness::new();
    let job = h.job("single");
    h.commits(&["a"]);
    let (b1, _) = h.build(&job).await;
    h.commits(&["b"]);
    h.build(&job).await;

    let (b3, r3) = h.build(&job).await;
    let (b4, r4) = h.build(&job).await;
    assert_eq!(h.window(&b3).parent_commit(), Some(&CommitId::new("a")));
    assert_eq!(h.window(&b4).parent_commit(), Some(&CommitId::new("a")));
    assert_eq!(r3, Some(b1.clone()));
    assert_eq!(r4, Some(b1));
}

#[tokio::test]
async fn rebuild_of_first_build_references_it() {
    let h = Harness::new();
    let job = h.job("single");
    h.commits(&["a"]);
    let (b1, _) = h.build(&job).await;

    let (b2, r2) = h.build(&job).await;
    assert_eq!(h.window(&b2).parent_commit(), Some(&CommitId::new("a")));
    assert_eq!(r2, Some(b1));
}

#[tokio::test]
async fn divergent_branches_built_in_turn() {
    let h = Harness::new();
    let job = h.job("multi");
    h.commits(&["init"]);
    let (master1, r) = h.build(&job).await;
    assert_eq!(r, None);

    h.repo.checkout_new_branch("side");
    h.commits(&["s1"]);
    let (side, r) = h.build(&job).await;
    assert_eq!(h.window(&side), window(&["s1"], "init"));
    assert_eq!(r, Some(master1.clone()));

    // master moved on; its parent is still the root build's commit
    h.repo.checkout("master");
    h.commits(&["m1"]);
    let (master2, r) = h.build(&job).await;
    assert_eq!(h.window(&master2), window(&["m1"], "init"));
    assert_eq!(r, Some(master1));

    // a branch forked from side picks up side's head as parent
    h.repo.checkout("side");
    h.repo.checkout_new_branch("feat");
    h.commits(&["f1"]);
    let (feat, r) = h.build(&job).await;
    assert_eq!(h.window(&feat), window(&["f1"], "s1"));
    assert_eq!(r, Some(side));
}

#[tokio::test]
async fn branch_forked_before_first_build() {
    let h = Harness::new();
    let job = h.job("multi2");
    h.commits(&["init"]);
    h.repo.checkout_new_branch("side");
    h.repo.checkout("master");
    h.commits(&["m2"]);

    let (master1, r) = h.build(&job).await;
    assert_eq!(h.window(&master1), window(&["m2", "init"], ""));
    assert_eq!(r, None);

    h.repo.checkout("side");
    h.commits(&["s2"]);
    let (side, r) = h.build(&job).await;
    assert_eq!(h.window(&side), window(&["s2"], "init"));
    assert_eq!(r, Some(master1));
}
