//! Domain Entities
//!
//! - `Employee` / `EmployeeRef` - Directory record and identifier-only reference
//! - `Compensation` / `CompensationHistory` - Salary records over time
//! - `ReportingStructure` - Derived report count for one employee

mod compensation;
mod employee;
mod reporting_structure;

pub use compensation::{Compensation, CompensationHistory};
pub use employee::{Employee, EmployeeRef};
pub use reporting_structure::ReportingStructure;
