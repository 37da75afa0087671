//! Employee Identifier Value Object
//!
//! A stable, unique identifier for an employee record. Freshly created
//! employees get a random v4 UUID; imported records keep whatever identifier
//! the source document carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Employee identifier
///
/// Serialized transparently as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Wrap an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("employee id must not be empty")]
pub struct EmptyEmployeeId;

/// Parses user input; surrounding whitespace is trimmed and blank ids are rejected.
impl FromStr for EmployeeId {
    type Err = EmptyEmployeeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmptyEmployeeId);
        }
        Ok(Self::new(trimmed))
    }
}
