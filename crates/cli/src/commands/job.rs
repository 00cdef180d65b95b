// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rp job` - Job management commands

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use rp_core::{BuildStore, Clock, Job, JobId, JobSpec};

use super::build::BuildView;
use super::{open_engine, GlobalArgs};
use crate::color;
use crate::exit_error::{from_engine, ExitError};
use crate::output::{format_time_ago, handle_list, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct JobArgs {
    #[command(subcommand)]
    pub command: JobCommand,
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Register a job
    Create {
        /// Job name
        name: String,

        /// Multi-branch project the job belongs to
        #[arg(long, requires = "branch")]
        project: Option<String>,

        /// Branch the job builds
        #[arg(long, requires = "project")]
        branch: Option<String>,

        /// Mark the branch as the project's primary branch
        #[arg(long, requires = "project")]
        primary: bool,
    },
    /// List jobs
    List,
    /// List builds of a job, newest first
    Builds {
        /// Job name
        job: String,
    },
}

pub(crate) fn format_job_list(out: &mut (impl Write + ?Sized), jobs: &[Job], now_ms: u64) {
    let mut table = Table::new(vec![
        Column::left("JOB"),
        Column::left("PROJECT"),
        Column::left("BRANCH"),
        Column::left("BUILDS"),
        Column::left("CREATED"),
    ]);
    for job in jobs {
        let (project, branch) = match &job.branch {
            Some(info) if info.primary => (info.project.clone(), format!("{} *", info.branch)),
            Some(info) => (info.project.clone(), info.branch.clone()),
            None => ("-".to_string(), "-".to_string()),
        };
        table.row(vec![
            job.id.to_string(),
            project,
            branch,
            job.last_build_number.to_string(),
            format_time_ago(job.created_at_ms, now_ms),
        ]);
    }
    table.render(out);
}

pub(crate) fn format_build_list(out: &mut (impl Write + ?Sized), builds: &[BuildView]) {
    let mut table = Table::new(vec![
        Column::left("BUILD"),
        Column::left("STATUS"),
        Column::muted("LATEST"),
        Column::left("COMMITS"),
        Column::left("REFERENCE"),
    ]);
    for view in builds {
        table.row(vec![
            view.build.id.to_string(),
            view.build.status.to_string(),
            view.latest_short().to_string(),
            view.window.as_ref().map(|w| w.len().to_string()).unwrap_or_else(|| "-".to_string()),
            view.reference_label(),
        ]);
    }
    table.render(out);
}

pub fn handle(command: JobCommand, global: &GlobalArgs, format: OutputFormat) -> Result<()> {
    let engine = open_engine(global)?;
    match command {
        JobCommand::Create { name, project, branch, primary } => {
            let mut spec = JobSpec::new(name.as_str()).primary(primary);
            spec.project = project;
            spec.branch = branch;
            let id = engine.create_job(spec).map_err(from_engine)?;
            println!("Created job {}", color::header(id.as_str()));
        }
        JobCommand::List => {
            let mut jobs: Vec<Job> = engine.read(|s| s.jobs.values().cloned().collect());
            jobs.sort_by(|a, b| a.id.cmp(&b.id));
            let now_ms = engine.clock().epoch_ms();
            handle_list(format, &jobs, "No jobs", |items, out| {
                format_job_list(out, items, now_ms)
            })?;
        }
        JobCommand::Builds { job } => {
            let job = JobId::new(job);
            let views = engine.read(|s| {
                if !s.has_job(&job) {
                    return None;
                }
                Some(
                    s.builds_of(&job)
                        .iter()
                        .filter_map(|b| BuildView::collect(s, b))
                        .collect::<Vec<_>>(),
                )
            });
            let Some(views) = views else {
                return Err(ExitError::not_found(format!("unknown job: {}", job)).into());
            };
            handle_list(format, &views, "No builds", |items, out| format_build_list(out, items))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
