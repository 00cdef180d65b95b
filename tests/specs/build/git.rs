// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference resolution against a real git repository

use crate::prelude::*;

fn build(temp: &Project, job: &str) -> String {
    let run = temp.rp().args(&["build", "start", job]).passes();
    let id = run.stdout().trim().to_string();
    temp.rp().args(&["build", "complete", &id]).passes();
    id
}

#[test]
fn second_build_references_the_first() {
    if !git_available() {
        return;
    }
    let temp = Project::empty();
    temp.git_init();
    let init = temp.git_commit("init");
    temp.rp().args(&["job", "create", "main"]).passes();

    let first = build(&temp, "main");
    temp.rp().args(&["build", "show", &first]).passes().stdout_has("Reference: none");

    temp.git_commit("second");
    let second = build(&temp, "main");
    temp.rp()
        .args(&["build", "show", &second])
        .passes()
        .stdout_has("Commits: 1")
        .stdout_has(&format!("Parent: {}", &init[..8]))
        .stdout_has("Reference: main#1");
}

#[test]
fn feature_branch_references_primary_branch_build() {
    if !git_available() {
        return;
    }
    let temp = Project::empty();
    temp.git_init();
    temp.git_commit("init");
    temp.rp()
        .args(&["job", "create", "p/master", "--project", "p", "--branch", "master", "--primary"])
        .passes();
    temp.rp().args(&["job", "create", "p/feature", "--project", "p", "--branch", "feature"]).passes();

    build(&temp, "p/master");
    temp.git_checkout_new("feature");
    temp.git_commit("feature work");
    let feature = build(&temp, "p/feature");

    temp.rp()
        .args(&["build", "show", &feature, "-o", "json"])
        .passes()
        .stdout_has("\"reference\": \"p/master#1\"");
}
