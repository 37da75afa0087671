//! Reporting structure resolver
//!
//! Counts the distinct employees below a root employee. Direct-report links
//! only carry identifiers, so every report is looked up through the
//! [`EmployeeStore`] to find its own reports. The graph may contain diamonds
//! (one employee under two managers) and cycles; each identifier is counted
//! at most once and the root is never counted.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Employee, ReportingStructure};
use crate::domain::ports::{EmployeeStore, StoreError};
use crate::domain::value_objects::EmployeeId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("employee not found: {id}")]
    RootNotFound { id: EmployeeId },

    #[error("employee {manager} lists direct report {id}, which does not exist")]
    DanglingReference { manager: EmployeeId, id: EmployeeId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A pending direct-report link: `manager` lists `report`.
struct Link {
    manager: EmployeeId,
    report: EmployeeId,
}

#[derive(Clone)]
pub struct ReportingStructureResolver {
    store: Arc<dyn EmployeeStore>,
}

impl ReportingStructureResolver {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Resolve the reporting structure of `root_id`.
    ///
    /// Fails without a partial result if the root is missing, if any reachable
    /// direct-report link names a missing employee, or if the store fails.
    pub fn resolve(&self, root_id: &EmployeeId) -> Result<ReportingStructure, ResolveError> {
        tracing::debug!(employee_id = %root_id, "resolving reporting structure");

        let root = self
            .store
            .lookup_by_id(root_id)?
            .ok_or_else(|| ResolveError::RootNotFound {
                id: root_id.clone(),
            })?;

        let number_of_reports = self.count_distinct_reports(&root)?;

        tracing::debug!(
            employee_id = %root_id,
            number_of_reports,
            "resolved reporting structure"
        );
        Ok(ReportingStructure::new(root, number_of_reports))
    }

    fn count_distinct_reports(&self, root: &Employee) -> Result<usize, ResolveError> {
        // Seeded with the root so a cycle back to it is skipped like any other revisit.
        let mut visited: HashSet<EmployeeId> = HashSet::new();
        visited.insert(root.employee_id.clone());

        let mut pending: Vec<Link> = Vec::new();
        push_links(&mut pending, root);

        let mut count = 0;
        while let Some(Link { manager, report }) = pending.pop() {
            if !visited.insert(report.clone()) {
                tracing::trace!(employee_id = %report, "already counted, skipping");
                continue;
            }
            count += 1;

            let Some(employee) = self.store.lookup_by_id(&report)? else {
                tracing::warn!(
                    manager = %manager,
                    employee_id = %report,
                    "direct report missing from directory"
                );
                return Err(ResolveError::DanglingReference {
                    manager,
                    id: report,
                });
            };

            tracing::trace!(
                employee_id = %report,
                direct_reports = employee.direct_reports.len(),
                "visited report"
            );
            push_links(&mut pending, &employee);
        }

        Ok(count)
    }
}

// Reversed so reports pop off the stack in listed order.
fn push_links(pending: &mut Vec<Link>, employee: &Employee) {
    pending.extend(employee.direct_reports.iter().rev().map(|r| Link {
        manager: employee.employee_id.clone(),
        report: r.employee_id.clone(),
    }));
}
