//! Compensation Use Case
//!
//! Records salary changes and answers "what is this employee paid".

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{Compensation, CompensationHistory};
use crate::domain::ports::{CompensationRepository, EmployeeStore, StoreError};
use crate::domain::value_objects::EmployeeId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompensationError {
    #[error("cannot record compensation for unknown employee: {id}")]
    UnknownEmployee { id: EmployeeId },

    #[error("no compensation recorded for employee: {id}")]
    NotFound { id: EmployeeId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct CompensationUseCase {
    employees: Arc<dyn EmployeeStore>,
    compensations: Arc<dyn CompensationRepository>,
}

impl CompensationUseCase {
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        compensations: Arc<dyn CompensationRepository>,
    ) -> Self {
        Self {
            employees,
            compensations,
        }
    }

    pub fn create(&self, compensation: Compensation) -> Result<Compensation, CompensationError> {
        let id = compensation.employee_id().clone();
        if self.employees.lookup_by_id(&id)?.is_none() {
            return Err(CompensationError::UnknownEmployee { id });
        }

        self.compensations.append(compensation.clone())?;
        tracing::info!(
            employee_id = %id,
            effective_date = %compensation.effective_date,
            "recorded compensation"
        );
        Ok(compensation)
    }

    /// All records for `id`, oldest effective date first.
    pub fn history(&self, id: &EmployeeId) -> Result<CompensationHistory, CompensationError> {
        let history = CompensationHistory::from_records(self.compensations.list_for(id)?);
        if history.is_empty() {
            return Err(CompensationError::NotFound { id: id.clone() });
        }
        Ok(history)
    }

    /// The record in force at `at`.
    pub fn current(
        &self,
        id: &EmployeeId,
        at: DateTime<Utc>,
    ) -> Result<Compensation, CompensationError> {
        self.history(id)?
            .current_at(at)
            .cloned()
            .ok_or_else(|| CompensationError::NotFound { id: id.clone() })
    }
}
