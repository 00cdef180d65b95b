// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rp config` - Configuration commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::{load_config, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Validate the configuration and print the effective values
    Check,
}

pub fn handle(command: ConfigCommand, global: &GlobalArgs) -> Result<()> {
    match command {
        ConfigCommand::Check => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            let config = load_config(global, &cwd)?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
