//! Reports command handler

use anyhow::Result;

use roster::config::OutputFormat;
use roster::domain::value_objects::EmployeeId;
use roster::presentation::UseCases;

use super::emit;

pub fn cmd_reports(id: &EmployeeId, use_cases: &UseCases, format: OutputFormat) -> Result<()> {
    let structure = use_cases.reporting.read(id)?;
    emit(&structure, format)
}
