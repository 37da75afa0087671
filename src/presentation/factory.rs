//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{CompensationUseCase, EmployeeUseCase, ReportingUseCase, SeedUseCase};
use crate::domain::ports::{CompensationRepository, EmployeeRepository};
use crate::infrastructure::JsonFileDirectory;

/// Every use case, sharing one directory store
pub struct UseCases {
    pub employees: EmployeeUseCase,
    pub compensations: CompensationUseCase,
    pub reporting: ReportingUseCase,
    pub seed: SeedUseCase,
}

/// Wire all use cases to a single directory implementation.
pub fn create_use_cases<D>(directory: Arc<D>) -> UseCases
where
    D: EmployeeRepository + CompensationRepository + 'static,
{
    UseCases {
        employees: EmployeeUseCase::new(directory.clone()),
        compensations: CompensationUseCase::new(directory.clone(), directory.clone()),
        reporting: ReportingUseCase::new(directory.clone()),
        seed: SeedUseCase::new(directory),
    }
}

/// Use cases backed by the JSON directory at `path`.
///
/// This is the main entry point used by the CLI.
pub fn create_file_use_cases(path: PathBuf) -> UseCases {
    create_use_cases(Arc::new(JsonFileDirectory::with_path(path)))
}
