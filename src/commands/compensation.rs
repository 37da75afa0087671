//! Compensation command handlers

use anyhow::Result;
use chrono::Utc;

use roster::config::OutputFormat;
use roster::domain::entities::Compensation;
use roster::presentation::cli::CompensationCommands;
use roster::presentation::UseCases;

use super::emit;

pub fn cmd_compensation(
    command: CompensationCommands,
    use_cases: &UseCases,
    format: OutputFormat,
) -> Result<()> {
    match command {
        CompensationCommands::Add {
            id,
            salary,
            effective,
        } => {
            let effective_date = effective.unwrap_or_else(Utc::now);
            let created = use_cases
                .compensations
                .create(Compensation::new(id, salary, effective_date))?;
            emit(&created, format)
        }
        CompensationCommands::History { id } => {
            let history = use_cases.compensations.history(&id)?;
            emit(history.records(), format)
        }
        CompensationCommands::Current { id, at } => {
            let current = use_cases
                .compensations
                .current(&id, at.unwrap_or_else(Utc::now))?;
            emit(&current, format)
        }
    }
}
