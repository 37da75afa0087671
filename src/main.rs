//! Roster CLI - employee directory and reporting-structure metrics
//!
//! Usage: roster [--json] [-v] [--store PATH] <COMMAND>
//!
//! Commands:
//!   employee      Create, show and update employee records
//!   compensation  Record and query compensation
//!   reports       Show how many distinct employees report to an employee
//!   seed          Import a JSON array of employee records

use anyhow::{Context, Result};
use clap::Parser;

use roster::config::{Config, OutputFormat};
use roster::presentation::cli::Cli;

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let loaded = Config::load_or_default(Some(&cwd)).context("failed to load configuration")?;

    roster::logging::init(&loaded.config.log.level, cli.verbose);

    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "loaded config");
    }
    for warning in &loaded.warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown config key"
        );
    }

    let mut config = loaded.config;
    if let Some(store) = cli.store {
        config.store.path = store;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    commands::run(cli.command, &config)
}
