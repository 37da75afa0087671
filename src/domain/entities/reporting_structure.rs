//! Reporting structure
//!
//! Derived per request and never persisted.

use serde::{Deserialize, Serialize};

use super::Employee;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    pub employee: Employee,
    /// Distinct employees reachable through direct-report links.
    pub number_of_reports: usize,
}

impl ReportingStructure {
    pub fn new(employee: Employee, number_of_reports: usize) -> Self {
        Self {
            employee,
            number_of_reports,
        }
    }
}
