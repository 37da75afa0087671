//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --store) are inherited by all subcommands
//! - Flags override the config file and ROSTER_* environment variables

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::domain::value_objects::EmployeeId;
use crate::error::RosterError;

/// Roster - employee directory and reporting-structure metrics
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Employee directory file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, show and update employee records
    Employee {
        #[command(subcommand)]
        command: EmployeeCommands,
    },

    /// Record and query compensation
    Compensation {
        #[command(subcommand)]
        command: CompensationCommands,
    },

    /// Show how many distinct employees report to an employee
    Reports {
        /// Employee id
        id: EmployeeId,
    },

    /// Import a JSON array of employee records
    Seed {
        /// Path to the employee database file
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommands {
    /// Add an employee to the directory
    Create {
        /// Use this id instead of generating one
        #[arg(long)]
        id: Option<EmployeeId>,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(long, default_value = "")]
        position: String,

        #[arg(long, default_value = "")]
        department: String,

        /// Direct report id (repeatable)
        #[arg(long = "report", value_name = "ID")]
        reports: Vec<EmployeeId>,
    },

    /// Show an employee record
    Show {
        /// Employee id
        id: EmployeeId,
    },

    /// Change fields of an employee record
    Update {
        /// Employee id
        id: EmployeeId,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        department: Option<String>,

        /// Replace the direct reports with these ids (repeatable)
        #[arg(long = "report", value_name = "ID")]
        reports: Vec<EmployeeId>,

        /// Remove all direct reports
        #[arg(long, conflicts_with = "reports")]
        clear_reports: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CompensationCommands {
    /// Record a salary for an employee
    Add {
        /// Employee id
        id: EmployeeId,

        /// Amount in the smallest currency unit
        #[arg(long)]
        salary: u64,

        /// Effective date (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        effective: Option<DateTime<Utc>>,
    },

    /// List every compensation record of an employee
    History {
        /// Employee id
        id: EmployeeId,
    },

    /// Show the compensation in force
    Current {
        /// Employee id
        id: EmployeeId,

        /// Point in time (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
    },
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RosterError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RosterError::InvalidTimestamp {
            value: value.to_string(),
            message: e.to_string(),
        })
}
