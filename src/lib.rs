//! Roster - employee directory and reporting-structure metrics
//!
//! Roster keeps an organization's employee records and compensation history,
//! and answers how many distinct employees sit below a given employee in the
//! reporting graph, counting indirect reports once and tolerating cycles.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::{Config, OutputFormat};
pub use domain::entities::{Compensation, Employee, EmployeeRef, ReportingStructure};
pub use domain::ports::{EmployeeStore, StoreError};
pub use domain::services::{ReportingStructureResolver, ResolveError};
pub use domain::value_objects::EmployeeId;
pub use error::{RosterError, RosterResult};
pub use infrastructure::{InMemoryDirectory, JsonFileDirectory};
