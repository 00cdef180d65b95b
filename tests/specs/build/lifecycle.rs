// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job and build lifecycle specs that need no git repository

use crate::prelude::*;

#[test]
fn job_create_and_list() {
    let temp = Project::empty();
    temp.rp().args(&["job", "create", "nightly"]).passes().stdout_has("Created job nightly");
    temp.rp()
        .args(&["job", "create", "p/master", "--project", "p", "--branch", "master", "--primary"])
        .passes();
    temp.rp()
        .args(&["job", "list"])
        .passes()
        .stdout_has("nightly")
        .stdout_has("p/master")
        .stdout_has("master *");
}

#[test]
fn empty_job_list() {
    let temp = Project::empty();
    temp.rp().args(&["job", "list"]).passes().stdout_has("No jobs");
}

#[test]
fn duplicate_job_fails() {
    let temp = Project::empty();
    temp.rp().args(&["job", "create", "nightly"]).passes();
    temp.rp().args(&["job", "create", "nightly"]).exits_with(1).stderr_has("already exists");
}

#[test]
fn builds_are_numbered_per_job() {
    let temp = Project::empty();
    temp.rp().args(&["job", "create", "nightly"]).passes();
    temp.rp().args(&["build", "start", "nightly"]).passes().stdout_eq("nightly#1");
    temp.rp().args(&["build", "start", "nightly"]).passes().stdout_eq("nightly#2");
}

#[test]
fn unknown_job_and_build_exit_with_not_found() {
    let temp = Project::empty();
    temp.rp().args(&["build", "start", "ghost"]).exits_with(3).stderr_has("unknown job");
    temp.rp().args(&["build", "show", "ghost#1"]).exits_with(3).stderr_has("unknown build");
    temp.rp().args(&["job", "builds", "ghost"]).exits_with(3);
}

#[test]
fn completing_outside_a_repository_records_no_reference() {
    let temp = Project::empty();
    temp.rp().args(&["job", "create", "nightly"]).passes();
    temp.rp().args(&["build", "start", "nightly"]).passes();
    temp.rp()
        .args(&["build", "complete", "nightly#1"])
        .passes()
        .stdout_has("no reference build");
    temp.rp()
        .args(&["build", "show", "nightly#1"])
        .passes()
        .stdout_has("Status: completed")
        .stdout_has("Commits: 0")
        .stdout_has("Reference: none");
}

#[test]
fn deleted_build_disappears_from_listing() {
    let temp = Project::empty();
    temp.rp().args(&["job", "create", "nightly"]).passes();
    temp.rp().args(&["build", "start", "nightly"]).passes();
    temp.rp().args(&["build", "start", "nightly"]).passes();
    temp.rp().args(&["build", "delete", "nightly#1"]).passes().stdout_has("Deleted build");
    temp.rp()
        .args(&["job", "builds", "nightly"])
        .passes()
        .stdout_has("nightly#2")
        .stdout_lacks("nightly#1");
}

#[test]
fn build_show_json() {
    let temp = Project::empty();
    temp.rp().args(&["job", "create", "nightly"]).passes();
    temp.rp().args(&["build", "start", "nightly"]).passes();
    let run = temp.rp().args(&["build", "show", "nightly#1", "-o", "json"]).passes();
    let json: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(json["build"]["id"], "nightly#1");
    assert_eq!(json["build"]["status"], "running");
    assert_eq!(json["resolved"], false);
}

#[test]
fn state_dir_env_is_honored() {
    let temp = Project::empty();
    let state = temp.path().join("custom-state");
    let state = state.to_str().unwrap();
    temp.rp().env("RP_STATE_DIR", state).args(&["job", "create", "nightly"]).passes();
    temp.rp().args(&["job", "list"]).passes().stdout_has("No jobs");
    temp.rp().env("RP_STATE_DIR", state).args(&["job", "list"]).passes().stdout_has("nightly");
}
