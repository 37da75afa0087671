//! Seed Use Case
//!
//! Bulk import of an employee database document: a JSON array of employee
//! records in the same camelCase shape the directory stores.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::Employee;
use crate::domain::ports::{EmployeeRepository, StoreError};
use crate::domain::value_objects::EmployeeId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("invalid employee database: {message}")]
    Parse { message: String },

    #[error("employee database lists {id} more than once")]
    DuplicateId { id: EmployeeId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct SeedSummary {
    pub created: usize,
    pub replaced: usize,
}

pub struct SeedUseCase {
    repository: Arc<dyn EmployeeRepository>,
}

impl SeedUseCase {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    pub fn import_json(&self, content: &str) -> Result<SeedSummary, SeedError> {
        let employees: Vec<Employee> =
            serde_json::from_str(content).map_err(|e| SeedError::Parse {
                message: e.to_string(),
            })?;
        self.import(employees)
    }

    /// Upsert every record in one write. Dangling direct-report links are
    /// accepted here and only surface when a reporting structure is resolved.
    pub fn import(&self, employees: Vec<Employee>) -> Result<SeedSummary, SeedError> {
        let mut seen = HashSet::new();
        for employee in &employees {
            if !seen.insert(&employee.employee_id) {
                return Err(SeedError::DuplicateId {
                    id: employee.employee_id.clone(),
                });
            }
        }

        let total = employees.len();
        let replaced = self.repository.save_all(employees)?;
        let summary = SeedSummary {
            created: total - replaced,
            replaced,
        };

        tracing::info!(
            created = summary.created,
            replaced = summary.replaced,
            "seeded employee directory"
        );
        Ok(summary)
    }
}
