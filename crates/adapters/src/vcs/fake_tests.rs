// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn empty_repository_has_no_head() {
    let repo = FakeRepository::new();
    assert!(matches!(repo.head_commit().await, Err(VcsError::NoHead)));
}

#[tokio::test]
async fn branches_share_history_up_to_fork() {
    let repo = FakeRepository::new();
    repo.commit("init");
    repo.commit("m1");
    repo.checkout_new_branch("side");
    repo.commit("s1");
    repo.checkout("master");
    repo.commit("m2");

    assert_eq!(repo.head_commit().await.unwrap(), "m2");
    let side = repo.tip("side").unwrap();
    assert_eq!(repo.log(&side, 0, 10).await.unwrap(), vec!["s1", "m1", "init"]);
    assert_eq!(repo.log(&CommitId::new("m2"), 1, 1).await.unwrap(), vec!["m1"]);
}

#[tokio::test]
async fn commits_since_stops_before_stop_commit() {
    let repo = FakeRepository::new();
    for id in ["a", "b", "c", "d"] {
        repo.commit(id);
    }
    let head = repo.head_commit().await.unwrap();
    let since = repo.commits_since(&head, Some(&CommitId::new("b")), 10).await.unwrap();
    assert_eq!(since, vec!["d", "c"]);

    let capped = repo.commits_since(&head, None, 2).await.unwrap();
    assert_eq!(capped, vec!["d", "c"]);
}

#[tokio::test]
async fn unknown_commit_is_an_error() {
    let repo = FakeRepository::new();
    repo.commit("a");
    let err = repo.log(&CommitId::new("zz"), 0, 5).await.unwrap_err();
    assert!(matches!(err, VcsError::UnknownCommit(_)));
}

#[tokio::test]
async fn fail_head_injects_error() {
    let repo = FakeRepository::new();
    repo.commit("a");
    repo.fail_head(true);
    assert!(repo.head_commit().await.is_err());
    repo.fail_head(false);
    assert_eq!(repo.head_commit().await.unwrap(), "a");
}
