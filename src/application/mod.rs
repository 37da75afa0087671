//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `EmployeeUseCase` - Create, read and update directory records
//! - `CompensationUseCase` - Record and query compensation history
//! - `ReportingUseCase` - Reporting structure of one employee
//! - `SeedUseCase` - Bulk import of an employee database

pub mod compensation;
pub mod employee;
pub mod reporting;
pub mod seed;

pub use compensation::{CompensationError, CompensationUseCase};
pub use employee::{EmployeeChanges, EmployeeError, EmployeeUseCase, NewEmployee};
pub use reporting::ReportingUseCase;
pub use seed::{SeedError, SeedSummary, SeedUseCase};
