//! Employee entity
//!
//! A directory record. Direct reports are held as [`EmployeeRef`]s: they name
//! the subordinate but never carry the subordinate's own report list, which
//! has to be looked up separately.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::EmployeeId;

/// Identifier-only reference to another employee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub employee_id: EmployeeId,
}

impl EmployeeRef {
    pub fn new(employee_id: impl Into<EmployeeId>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: EmployeeId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub direct_reports: Vec<EmployeeRef>,
}

impl Employee {
    pub fn new(employee_id: impl Into<EmployeeId>) -> Self {
        Self {
            employee_id: employee_id.into(),
            first_name: String::new(),
            last_name: String::new(),
            position: String::new(),
            department: String::new(),
            direct_reports: Vec::new(),
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_report(mut self, employee_id: impl Into<EmployeeId>) -> Self {
        self.direct_reports.push(EmployeeRef::new(employee_id));
        self
    }

    pub fn id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Reference to this employee, as stored in other records.
    pub fn to_ref(&self) -> EmployeeRef {
        EmployeeRef {
            employee_id: self.employee_id.clone(),
        }
    }

    pub fn has_direct_report(&self, id: &EmployeeId) -> bool {
        self.direct_reports.iter().any(|r| &r.employee_id == id)
    }
}

// Seed documents write `"directReports": null` for leaf employees.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EmployeeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EmployeeRef>>::deserialize(deserializer)?.unwrap_or_default())
}
