//! Domain Services
//!
//! Business logic that operates on domain entities through ports.
//! Services receive their ports at construction and hold no other state.

mod reporting_resolver;

pub use reporting_resolver::{ReportingStructureResolver, ResolveError};
