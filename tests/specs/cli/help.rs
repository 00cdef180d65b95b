// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn rp_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn rp_help_lists_top_level_commands() {
    cli().args(&["--help"]).passes().stdout_has("job").stdout_has("build").stdout_has("config");
}

#[test]
fn rp_build_help_shows_subcommands() {
    cli()
        .args(&["build", "--help"])
        .passes()
        .stdout_has("start")
        .stdout_has("complete")
        .stdout_has("delete")
        .stdout_has("show");
}

#[test]
fn rp_job_help_shows_subcommands() {
    cli()
        .args(&["job", "--help"])
        .passes()
        .stdout_has("create")
        .stdout_has("list")
        .stdout_has("builds");
}

#[test]
fn rp_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn rp_build_complete_requires_a_build_id() {
    cli().args(&["build", "complete"]).fails().stderr_has("Usage:");
}
