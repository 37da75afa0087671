//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod employee_id;

pub use employee_id::{EmployeeId, EmptyEmployeeId};
