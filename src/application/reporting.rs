//! Reporting Use Case
//!
//! Entry point for reporting-structure reads. The counting itself lives in
//! the domain resolver.

use std::sync::Arc;

use crate::domain::entities::ReportingStructure;
use crate::domain::ports::EmployeeStore;
use crate::domain::services::{ReportingStructureResolver, ResolveError};
use crate::domain::value_objects::EmployeeId;

pub struct ReportingUseCase {
    resolver: ReportingStructureResolver,
}

impl ReportingUseCase {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            resolver: ReportingStructureResolver::new(store),
        }
    }

    pub fn read(&self, id: &EmployeeId) -> Result<ReportingStructure, ResolveError> {
        self.resolver.resolve(id)
    }
}
