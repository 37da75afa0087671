//! Compensation entity
//!
//! A salary record for one employee, effective from a given instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EmployeeRef;
use crate::domain::value_objects::EmployeeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub employee: EmployeeRef,
    /// Amount in the smallest currency unit.
    pub salary: u64,
    pub effective_date: DateTime<Utc>,
}

impl Compensation {
    pub fn new(
        employee_id: impl Into<EmployeeId>,
        salary: u64,
        effective_date: DateTime<Utc>,
    ) -> Self {
        Self {
            employee: EmployeeRef::new(employee_id),
            salary,
            effective_date,
        }
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee.employee_id
    }

    pub fn is_effective_at(&self, at: DateTime<Utc>) -> bool {
        self.effective_date <= at
    }
}

/// Compensation records of a single employee, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompensationHistory {
    records: Vec<Compensation>,
}

impl CompensationHistory {
    /// Orders records by effective date. Records sharing a date keep their
    /// insertion order.
    pub fn from_records(mut records: Vec<Compensation>) -> Self {
        records.sort_by_key(|c| c.effective_date);
        Self { records }
    }

    pub fn records(&self) -> &[Compensation] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Compensation> {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record in force at `at`: the latest one whose effective date is not
    /// after `at`. For equal dates the most recently recorded wins.
    pub fn current_at(&self, at: DateTime<Utc>) -> Option<&Compensation> {
        self.records.iter().rev().find(|c| c.is_effective_at(at))
    }
}
