//! Employee Use Case
//!
//! Create, read and update directory records.

use std::sync::Arc;

use crate::domain::entities::{Employee, EmployeeRef};
use crate::domain::ports::{EmployeeRepository, StoreError};
use crate::domain::value_objects::EmployeeId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmployeeError {
    #[error("employee not found: {id}")]
    NotFound { id: EmployeeId },

    #[error("employee already exists: {id}")]
    AlreadyExists { id: EmployeeId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fields for a new directory record
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    /// Generated when absent
    pub employee_id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub direct_reports: Vec<EmployeeId>,
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub direct_reports: Option<Vec<EmployeeId>>,
}

impl EmployeeChanges {
    fn apply_to(self, employee: &mut Employee) {
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(direct_reports) = self.direct_reports {
            employee.direct_reports = direct_reports.into_iter().map(EmployeeRef::new).collect();
        }
    }
}

pub struct EmployeeUseCase {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeUseCase {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    pub fn create(&self, new: NewEmployee) -> Result<Employee, EmployeeError> {
        let employee_id = new.employee_id.unwrap_or_else(EmployeeId::generate);
        let employee = Employee {
            employee_id: employee_id.clone(),
            first_name: new.first_name,
            last_name: new.last_name,
            position: new.position,
            department: new.department,
            direct_reports: new.direct_reports.into_iter().map(EmployeeRef::new).collect(),
        };

        if !self.repository.insert_new(employee.clone())? {
            return Err(EmployeeError::AlreadyExists { id: employee_id });
        }

        tracing::info!(employee_id = %employee_id, "created employee");
        Ok(employee)
    }

    pub fn read(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        tracing::debug!(employee_id = %id, "reading employee");
        self.repository
            .lookup_by_id(id)?
            .ok_or_else(|| EmployeeError::NotFound { id: id.clone() })
    }

    /// Replace the record stored under `id`. The id in `employee` is ignored.
    pub fn update(&self, id: &EmployeeId, mut employee: Employee) -> Result<Employee, EmployeeError> {
        employee.employee_id = id.clone();

        if !self.repository.replace(employee.clone())? {
            return Err(EmployeeError::NotFound { id: id.clone() });
        }

        tracing::info!(employee_id = %id, "updated employee");
        Ok(employee)
    }

    /// Read-modify-write convenience over [`EmployeeUseCase::update`].
    pub fn amend(&self, id: &EmployeeId, changes: EmployeeChanges) -> Result<Employee, EmployeeError> {
        let mut employee = self.read(id)?;
        changes.apply_to(&mut employee);
        self.update(id, employee)
    }
}
