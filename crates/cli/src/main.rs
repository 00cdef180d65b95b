// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rp - reference build resolution for CI jobs

mod color;
mod commands;
mod exit_error;
mod output;
mod table;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{build, config, job, GlobalArgs};
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "rp",
    version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("RP_GIT_HASH")),
    about = "Pick the reference build a CI build is compared against",
    styles = color::styles()
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Job management
    Job(job::JobArgs),
    /// Build lifecycle and reference resolution
    Build(build::BuildArgs),
    /// Inspect the effective configuration
    Config(config::ConfigArgs),
}

fn main() {
    let code = match run() {
        Ok(()) => 0,
        Err(err) => match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("error: {}", exit);
                exit.code
            }
            None => {
                eprintln!("error: {:#}", err);
                1
            }
        },
    };
    std::process::exit(code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(async move {
        match command {
            Commands::Job(args) => job::handle(args.command, &cli.global, cli.output),
            Commands::Build(args) => build::handle(args.command, &cli.global, cli.output).await,
            Commands::Config(args) => config::handle(args.command, &cli.global),
        }
    })
}
