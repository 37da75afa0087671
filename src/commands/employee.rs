//! Employee command handlers

use anyhow::Result;

use roster::application::{EmployeeChanges, NewEmployee};
use roster::config::OutputFormat;
use roster::presentation::cli::EmployeeCommands;
use roster::presentation::UseCases;

use super::emit;

pub fn cmd_employee(
    command: EmployeeCommands,
    use_cases: &UseCases,
    format: OutputFormat,
) -> Result<()> {
    let employee = match command {
        EmployeeCommands::Create {
            id,
            first_name,
            last_name,
            position,
            department,
            reports,
        } => use_cases.employees.create(NewEmployee {
            employee_id: id,
            first_name,
            last_name,
            position,
            department,
            direct_reports: reports,
        })?,
        EmployeeCommands::Show { id } => use_cases.employees.read(&id)?,
        EmployeeCommands::Update {
            id,
            first_name,
            last_name,
            position,
            department,
            reports,
            clear_reports,
        } => {
            let direct_reports = if clear_reports {
                Some(Vec::new())
            } else if reports.is_empty() {
                None
            } else {
                Some(reports)
            };
            use_cases.employees.amend(
                &id,
                EmployeeChanges {
                    first_name,
                    last_name,
                    position,
                    department,
                    direct_reports,
                },
            )?
        }
    };

    emit(&employee, format)
}
