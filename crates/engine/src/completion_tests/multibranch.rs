// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Branch jobs of project `p` resolving against the primary `master` job.

use super::Harness;
use rp_core::{JobId, ReferenceConfig};

struct Project {
    h: Harness,
    master: JobId,
    feature: JobId,
}

/// Project with a two-commit master history, as after `git init` plus one commit.
fn project(config: ReferenceConfig) -> Project {
    let h = Harness::with_config(config);
    let master = h.branch_job("p", "master", true);
    let feature = h.branch_job("p", "feature", false);
    h.commits(&["init", "flow"]);
    Project { h, master, feature }
}

#[tokio::test]
async fn feature_references_master_at_fork_point() {
    let p = project(ReferenceConfig::default());
    let (master1, _) = p.h.build(&p.master).await;
    assert_eq!(p.h.window(&master1).len(), 2);

    p.h.repo.checkout_new_branch("feature");
    p.h.commits(&["tweaked"]);
    let (feature1, r) = p.h.build(&p.feature).await;
    assert_eq!(p.h.window(&feature1).len(), 3);
    assert_eq!(r.as_ref().map(|b| b.as_str()), Some("p/master#1"));
}

#[tokio::test]
async fn master_moved_on_after_fork() {
    let p = project(ReferenceConfig::default());
    p.h.build(&p.master).await;
    p.h.repo.checkout_new_branch("feature");
    p.h.commits(&["tweaked"]);

    p.h.repo.checkout("master");
    p.h.commits(&["test"]);
    let (master2, _) = p.h.build(&p.master).await;
    assert_eq!(p.h.window(&master2).len(), 1);

    p.h.repo.checkout("feature");
    let (feature1, r) = p.h.build(&p.feature).await;
    assert_eq!(p.h.window(&feature1).len(), 3);
    assert_eq!(r.as_ref().map(|b| b.as_str()), Some("p/master#1"));
}

#[tokio::test]
async fn reference_build_with_commits_unknown_to_feature() {
    let p = project(ReferenceConfig::default().latest_build_if_not_found(false));
    p.h.build(&p.master).await;
    p.h.commits(&["test"]);
    p.h.repo.checkout_new_branch("feature");
    p.h.repo.checkout("master");
    p.h.commits(&["edit-test"]);
    let (master2, _) = p.h.build(&p.master).await;
    assert_eq!(p.h.window(&master2).len(), 2);

    p.h.repo.checkout("feature");
    p.h.build(&p.feature).await;
    p.h.commits(&["tweaked"]);
    let (feature2, r) = p.h.build(&p.feature).await;
    assert_eq!(p.h.window(&feature2).len(), 1);
    assert_eq!(r.as_ref().map(|b| b.as_str()), Some("p/master#2"));
}

#[tokio::test]
async fn insufficient_max_commits_finds_nothing() {
    let p = project(ReferenceConfig::default().max_commits(2));
    p.h.build(&p.master).await;
    p.h.repo.checkout_new_branch("feature");
    p.h.commits(&["tweaked", "test"]);

    let (feature1, r) = p.h.build(&p.feature).await;
    assert_eq!(p.h.window(&feature1).len(), 4);
    assert_eq!(r, None);
}

#[tokio::test]
async fn skip_unknown_commits_passes_over_master_build() {
    let setup = |config: ReferenceConfig| async move {
        let p = project(config);
        p.h.build(&p.master).await;
        p.h.commits(&["test"]);
        p.h.repo.checkout_new_branch("feature");
        p.h.commits(&["tweaked"]);
        p.h.repo.checkout("master");
        p.h.commits(&["edit-test"]);
        let (master2, _) = p.h.build(&p.master).await;
        assert_eq!(p.h.window(&master2).len(), 2);
        p.h.repo.checkout("feature");
        let (feature1, r) = p.h.build(&p.feature).await;
        assert_eq!(p.h.window(&feature1).len(), 4);
        r.map(|b| b.to_string())
    };

    let strict = setup(ReferenceConfig::default().skip_unknown_commits(true)).await;
    assert_eq!(strict.as_deref(), Some("p/master#1"));

    let lenient = setup(ReferenceConfig::default()).await;
    assert_eq!(lenient.as_deref(), Some("p/master#2"));
}

#[tokio::test]
async fn fallback_to_newest_master_build() {
    let config = ReferenceConfig::default().max_commits(2).latest_build_if_not_found(true);
    let p = project(config);
    p.h.build(&p.master).await;
    p.h.commits(&["testfile"]);
    let (master2, _) = p.h.build(&p.master).await;
    assert_eq!(p.h.window(&master2).len(), 1);

    p.h.repo.checkout_new_branch("feature");
    p.h.commits(&["tweaked", "test"]);
    let (feature1, r) = p.h.build(&p.feature).await;
    assert_eq!(p.h.window(&feature1).len(), 5);
    assert_eq!(r, Some(master2));
}

#[tokio::test]
async fn branch_forked_from_another_feature() {
    let p = project(ReferenceConfig::default());
    let (master1, _) = p.h.build(&p.master).await;
    p.h.repo.checkout_new_branch("feature");
    p.h.commits(&["tweaked"]);
    let (feature1, r) = p.h.build(&p.feature).await;
    assert_eq!(p.h.window(&feature1).len(), 3);
    assert_eq!(r, Some(master1.clone()));

    let feature2 = p.h.branch_job("p", "feature2", false);
    p.h.repo.checkout_new_branch("feature2");
    p.h.commits(&["second-feature"]);
    let (_, r) = p.h.build(&feature2).await;
    assert_eq!(r, Some(master1));
}

#[tokio::test]
async fn deleted_master_build_is_not_found() {
    let p = project(ReferenceConfig::default());
    let (master1, _) = p.h.build(&p.master).await;
    p.h.repo.checkout_new_branch("feature");
    p.h.commits(&["tweaked"]);

    p.h.repo.checkout("master");
    p.h.commits(&["testfile"]);
    let (master2, _) = p.h.build(&p.master).await;
    assert_eq!(p.h.window(&master2).len(), 1);

    p.h.engine.delete_build(&master1).unwrap();

    p.h.repo.checkout("feature");
    let (feature1, r) = p.h.build(&p.feature).await;
    assert_eq!(p.h.window(&feature1).len(), 3);
    assert_eq!(r, None);
}

#[tokio::test]
async fn configured_reference_job_overrides_primary_branch() {
    let p = project(ReferenceConfig::default().reference_job("p/feature"));
    p.h.repo.checkout_new_branch("feature");
    p.h.commits(&["tweaked"]);
    let (feature1, _) = p.h.build(&p.feature).await;

    p.h.repo.checkout("master");
    p.h.commits(&["m1"]);
    let (_, r) = p.h.build(&p.master).await;
    assert_eq!(r, Some(feature1));
}
