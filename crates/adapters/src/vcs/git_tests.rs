// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::process::Command as StdCommand;
use tempfile::TempDir;

fn git_available() -> bool {
    StdCommand::new("git").arg("--version").output().map(|o| o.status.success()).unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=rp", "-c", "user.email=rp@example.com", "-c", "commit.gpgsign=false"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "git {args:?}: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn init_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "--quiet"]);
    dir
}

fn commit(dir: &Path, message: &str) -> String {
    git(dir, &["commit", "--quiet", "--allow-empty", "-m", message]);
    git(dir, &["rev-parse", "HEAD"])
}

#[tokio::test]
async fn head_of_empty_repository_is_an_error() {
    if !git_available() {
        return;
    }
    let dir = init_repo();
    let repo = GitCli::new(dir.path());
    assert!(matches!(repo.head_commit().await, Err(VcsError::NoHead)));
}

#[tokio::test]
async fn head_and_log_follow_history() {
    if !git_available() {
        return;
    }
    let dir = init_repo();
    let a = commit(dir.path(), "a");
    let b = commit(dir.path(), "b");
    let c = commit(dir.path(), "c");

    let repo = GitCli::new(dir.path());
    let head = repo.head_commit().await.unwrap();
    assert_eq!(head, c.as_str());

    let all = repo.log(&head, 0, 10).await.unwrap();
    assert_eq!(all, vec![c.as_str(), b.as_str(), a.as_str()]);

    let page = repo.log(&head, 1, 1).await.unwrap();
    assert_eq!(page, vec![b.as_str()]);
}

#[tokio::test]
async fn log_of_unknown_commit_fails() {
    if !git_available() {
        return;
    }
    let dir = init_repo();
    commit(dir.path(), "a");
    let repo = GitCli::new(dir.path());
    let bogus = CommitId::new("0123456789012345678901234567890123456789");
    assert!(matches!(repo.log(&bogus, 0, 5).await, Err(VcsError::CommandFailed { .. })));
}

#[tokio::test]
async fn missing_directory_has_no_head() {
    if !git_available() {
        return;
    }
    let repo = GitCli::new("/nonexistent/rp-test-repo");
    assert!(repo.head_commit().await.is_err());
}
