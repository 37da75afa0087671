//! Domain Layer
//!
//! The core of roster: the directory model and the reporting-structure
//! computation, with no I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Employee, Compensation, ReportingStructure
//! - `value_objects/` - Immutable value types (EmployeeId)
//! - `services/` - Domain services (ReportingStructureResolver)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Injected ports** - Services receive their stores at construction
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
