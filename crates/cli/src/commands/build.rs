// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rp build` - Build lifecycle commands

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use rp_adapters::GitCli;
use rp_core::{Build, BuildId, BuildStore, CommitWindow, JobId, ReferencePointer};
use rp_storage::MaterializedState;
use serde::Serialize;

use super::{open_engine, GlobalArgs};
use crate::color;
use crate::exit_error::{from_engine, ExitError};
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct BuildArgs {
    #[command(subcommand)]
    pub command: BuildCommand,
}

#[derive(Subcommand)]
pub enum BuildCommand {
    /// Start the next build of a job and print its id
    Start {
        /// Job name
        job: String,
    },
    /// Complete a build: record its commits and resolve its reference build
    Complete {
        /// Build id, e.g. "main#3"
        build: String,

        /// Git working tree the build ran against
        #[arg(long, default_value = ".")]
        repo: PathBuf,
    },
    /// Delete a build
    Delete {
        /// Build id
        build: String,
    },
    /// Show a build's commit window and reference
    Show {
        /// Build id
        build: String,
    },
}

/// Everything recorded about one build.
#[derive(Debug, Serialize)]
pub struct BuildView {
    pub build: Build,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<CommitWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<BuildId>,
    /// Reference target no longer exists.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dangling: bool,
    /// Reference has been resolved (possibly to nothing).
    pub resolved: bool,
}

impl BuildView {
    pub fn collect(state: &MaterializedState, id: &BuildId) -> Option<Self> {
        let build = state.lookup(id)?.clone();
        let pointer: Option<&ReferencePointer> = state.reference_pointer(id);
        let reference = pointer.and_then(|p| p.reference_build().cloned());
        let dangling = reference.as_ref().is_some_and(|r| state.lookup(r).is_none());
        Some(Self {
            build,
            window: state.commit_window(id).cloned(),
            reference,
            dangling,
            resolved: pointer.is_some(),
        })
    }

    pub fn latest_short(&self) -> &str {
        self.window
            .as_ref()
            .and_then(|w| w.latest_commit())
            .map(|c| c.short(8))
            .unwrap_or("-")
    }

    pub fn reference_label(&self) -> String {
        match (&self.reference, self.resolved) {
            (Some(r), _) if self.dangling => format!("{} (deleted)", r),
            (Some(r), _) => r.to_string(),
            (None, true) => "none".to_string(),
            (None, false) => "-".to_string(),
        }
    }
}

fn print_build(view: &BuildView) {
    println!("{} {}", color::header("Build:"), view.build.id);
    println!("{} {}", color::header("Status:"), view.build.status);
    match &view.window {
        Some(window) => {
            let parent = window.parent_commit().map(|c| c.short(8)).unwrap_or("-");
            println!("{} {}", color::header("Latest:"), view.latest_short());
            println!("{} {}", color::header("Parent:"), parent);
            println!("{} {}", color::header("Commits:"), window.len());
            for commit in window.commits() {
                println!("  {}", color::muted(commit.short(8)));
            }
        }
        None => println!("{} {}", color::header("Commits:"), color::muted("not recorded")),
    }
    println!("{} {}", color::header("Reference:"), view.reference_label());
}

fn parse_build(raw: &str) -> Result<BuildId> {
    let id = BuildId::new(raw);
    if id.job().is_none() || id.number().is_none() {
        return Err(ExitError::new(1, format!("invalid build id '{}': expected <job>#<n>", raw))
            .into());
    }
    Ok(id)
}

pub async fn handle(
    command: BuildCommand,
    global: &GlobalArgs,
    format: OutputFormat,
) -> Result<()> {
    let engine = open_engine(global)?;
    match command {
        BuildCommand::Start { job } => {
            let id = engine.start_build(&JobId::new(job)).map_err(from_engine)?;
            format_or_json(format, &id, || println!("{}", id))?;
        }
        BuildCommand::Complete { build, repo } => {
            let id = parse_build(&build)?;
            let git = GitCli::new(repo);
            let pointer = engine.complete_build(&id, &git).await.map_err(from_engine)?;
            format_or_json(format, &pointer, || match pointer.reference_build() {
                Some(r) => println!("{}", r),
                None => println!("{}", color::muted("no reference build")),
            })?;
        }
        BuildCommand::Delete { build } => {
            let id = parse_build(&build)?;
            engine.delete_build(&id).map_err(from_engine)?;
            println!("Deleted build {}", id);
        }
        BuildCommand::Show { build } => {
            let id = parse_build(&build)?;
            let Some(view) = engine.read(|s| BuildView::collect(s, &id)) else {
                return Err(ExitError::not_found(format!("unknown build: {}", id)).into());
            };
            format_or_json(format, &view, || print_build(&view))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
