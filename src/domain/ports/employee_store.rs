//! EmployeeStore / EmployeeRepository ports
//!
//! `EmployeeStore` is the read-only lookup consumed by the reporting resolver.
//! `EmployeeRepository` adds the writes needed by the directory use cases.

use std::path::PathBuf;

use crate::domain::entities::Employee;
use crate::domain::value_objects::EmployeeId;

/// Failure to reach or decode the backing store.
///
/// A missing record is not a `StoreError`; lookups report it as `Ok(None)`.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access employee directory: {message}")]
    Access { message: String },

    #[error("Failed to serialize employee directory: {message}")]
    Serialization { message: String },

    #[error(
        "employee directory corrupted: {path}\n  → Fix: restore the file or re-run `roster seed`\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}

/// Read access to employee records.
///
/// Lookups must be idempotent and safe to call concurrently; the resolver
/// calls this once per distinct employee it visits.
pub trait EmployeeStore: Send + Sync {
    fn lookup_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError>;
}

pub trait EmployeeRepository: EmployeeStore {
    /// Inserts `employee` unless its id is taken. Returns `false` when taken.
    fn insert_new(&self, employee: Employee) -> Result<bool, StoreError>;

    /// Replaces an existing record. Returns `false` when no record has the id.
    fn replace(&self, employee: Employee) -> Result<bool, StoreError>;

    /// Upserts a batch in one write. Returns how many existing records were replaced.
    fn save_all(&self, employees: Vec<Employee>) -> Result<usize, StoreError>;
}
