//! Command handlers
//!
//! Each handler runs one use case and prints its result to stdout in the
//! configured output format.

mod compensation;
mod employee;
mod reports;
mod seed;

use anyhow::Result;
use serde::Serialize;

use roster::config::{Config, OutputFormat};
use roster::presentation::cli::Commands;
use roster::presentation::output::{self, TextView};
use roster::presentation::create_file_use_cases;

pub fn run(command: Commands, config: &Config) -> Result<()> {
    let use_cases = create_file_use_cases(config.store.path.clone());
    let format = config.output.format;

    match command {
        Commands::Employee { command } => employee::cmd_employee(command, &use_cases, format),
        Commands::Compensation { command } => {
            compensation::cmd_compensation(command, &use_cases, format)
        }
        Commands::Reports { id } => reports::cmd_reports(&id, &use_cases, format),
        Commands::Seed { file } => seed::cmd_seed(&file, &use_cases, format),
    }
}

fn emit<T>(value: &T, format: OutputFormat) -> Result<()>
where
    T: Serialize + TextView + ?Sized,
{
    let rendered = output::render(value, format)?;
    match format {
        OutputFormat::Json => println!("{rendered}"),
        OutputFormat::Text => print!("{rendered}"),
    }
    Ok(())
}
