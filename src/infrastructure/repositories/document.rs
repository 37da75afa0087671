//! Directory document
//!
//! The serialized shape shared by every repository implementation: one
//! document holding all employees and all compensation records.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Compensation, Employee};
use crate::domain::value_objects::EmployeeId;

pub(crate) const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DirectoryDocument {
    pub version: u32,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub compensations: Vec<Compensation>,
}

impl Default for DirectoryDocument {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            employees: Vec::new(),
            compensations: Vec::new(),
        }
    }
}

impl DirectoryDocument {
    pub fn find(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.employee_id == id)
    }

    pub fn insert_new(&mut self, employee: Employee) -> bool {
        if self.find(&employee.employee_id).is_some() {
            return false;
        }
        self.employees.push(employee);
        true
    }

    pub fn replace(&mut self, employee: Employee) -> bool {
        match self
            .employees
            .iter_mut()
            .find(|e| e.employee_id == employee.employee_id)
        {
            Some(existing) => {
                *existing = employee;
                true
            }
            None => false,
        }
    }

    /// Returns true when an existing record was replaced.
    pub fn upsert(&mut self, employee: Employee) -> bool {
        if self.replace(employee.clone()) {
            return true;
        }
        self.employees.push(employee);
        false
    }

    pub fn compensations_for(&self, id: &EmployeeId) -> Vec<Compensation> {
        self.compensations
            .iter()
            .filter(|c| c.employee_id() == id)
            .cloned()
            .collect()
    }
}
