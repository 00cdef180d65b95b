// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rp config check` specs

use crate::prelude::*;

#[test]
fn defaults_are_printed_without_a_config_file() {
    let temp = Project::empty();
    temp.rp()
        .args(&["config", "check"])
        .passes()
        .stdout_has("max_commits = 100")
        .stdout_has("max_recorded_commits = 200")
        .stdout_has("skip_unknown_commits = false");
}

#[test]
fn config_file_in_working_directory_is_loaded() {
    let temp = Project::empty();
    temp.file("refpoint.toml", "reference_job = \"p/master\"\nmax_commits = 25\n");
    temp.rp()
        .args(&["config", "check"])
        .passes()
        .stdout_has("reference_job = \"p/master\"")
        .stdout_has("max_commits = 25");
}

#[test]
fn flags_override_the_config_file() {
    let temp = Project::empty();
    temp.file("refpoint.toml", "max_commits = 25\n");
    temp.rp()
        .args(&["config", "check", "--max-commits", "5", "--latest-build-if-not-found"])
        .passes()
        .stdout_has("max_commits = 5")
        .stdout_has("latest_build_if_not_found = true");
}

#[test]
fn zero_budget_is_rejected() {
    let temp = Project::empty();
    temp.file("refpoint.toml", "max_commits = 0\n");
    temp.rp().args(&["config", "check"]).exits_with(2).stderr_has("max_commits");
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = Project::empty();
    temp.file("refpoint.toml", "max_comits = 10\n");
    temp.rp().args(&["config", "check"]).exits_with(2).stderr_has("max_comits");
}

#[test]
fn missing_explicit_config_file_fails() {
    let temp = Project::empty();
    temp.rp().args(&["config", "check", "--config", "absent.toml"]).exits_with(2);
}
