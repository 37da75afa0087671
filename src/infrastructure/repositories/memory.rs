//! In-memory directory
//!
//! Keeps the whole directory behind an `RwLock`. Used for ephemeral runs and
//! as a drop-in store in tests.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::document::DirectoryDocument;
use crate::domain::entities::{Compensation, Employee};
use crate::domain::ports::{CompensationRepository, EmployeeRepository, EmployeeStore, StoreError};
use crate::domain::value_objects::EmployeeId;

#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    document: RwLock<DirectoryDocument>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let mut document = DirectoryDocument::default();
        for employee in employees {
            document.upsert(employee);
        }
        Self {
            document: RwLock::new(document),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, DirectoryDocument>, StoreError> {
        self.document.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, DirectoryDocument>, StoreError> {
        self.document.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> StoreError {
    StoreError::Access {
        message: "directory lock poisoned".to_string(),
    }
}

impl EmployeeStore for InMemoryDirectory {
    fn lookup_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        Ok(self.read()?.find(id).cloned())
    }
}

impl EmployeeRepository for InMemoryDirectory {
    fn insert_new(&self, employee: Employee) -> Result<bool, StoreError> {
        Ok(self.write()?.insert_new(employee))
    }

    fn replace(&self, employee: Employee) -> Result<bool, StoreError> {
        Ok(self.write()?.replace(employee))
    }

    fn save_all(&self, employees: Vec<Employee>) -> Result<usize, StoreError> {
        let mut document = self.write()?;
        let mut replaced = 0;
        for employee in employees {
            if document.upsert(employee) {
                replaced += 1;
            }
        }
        Ok(replaced)
    }
}

impl CompensationRepository for InMemoryDirectory {
    fn append(&self, compensation: Compensation) -> Result<(), StoreError> {
        self.write()?.compensations.push(compensation);
        Ok(())
    }

    fn list_for(&self, id: &EmployeeId) -> Result<Vec<Compensation>, StoreError> {
        Ok(self.read()?.compensations_for(id))
    }
}
