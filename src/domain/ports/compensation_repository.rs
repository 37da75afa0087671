//! CompensationRepository port
//!
//! Append-only storage of compensation records.

use super::StoreError;
use crate::domain::entities::Compensation;
use crate::domain::value_objects::EmployeeId;

pub trait CompensationRepository: Send + Sync {
    fn append(&self, compensation: Compensation) -> Result<(), StoreError>;

    /// All records for `id` in insertion order. Empty if there are none.
    fn list_for(&self, id: &EmployeeId) -> Result<Vec<Compensation>, StoreError>;
}
