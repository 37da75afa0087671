//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compensation_repository;
pub mod employee_store;

pub use compensation_repository::CompensationRepository;
pub use employee_store::{EmployeeRepository, EmployeeStore, StoreError};
