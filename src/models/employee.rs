//! Employee record model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Validate;
use crate::transport;
use crate::{AppError, Result};

/// Employment status for an employee record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmployeeStatus {
    /// Currently employed and working.
    Active,
    /// Employment ended.
    Terminated,
    /// Temporarily away (parental, medical, sabbatical).
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl EmployeeStatus {
    /// Stored / displayed label for the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Terminated => "Terminated",
            Self::OnLeave => "On Leave",
        }
    }

    /// Parse a stored status label.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` when the label is not a declared status.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Active" => Ok(Self::Active),
            "Terminated" => Ok(Self::Terminated),
            "On Leave" => Ok(Self::OnLeave),
            other => Err(AppError::Db(format!("invalid employee status: {other}"))),
        }
    }
}

/// Employee domain record.
///
/// The store assigns the id (integer rowid, transported as a string).
/// `salary` is kept at full precision; `hire_date` is always UTC. Wire
/// field names are camelCase to match the dashboard client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier, transported as a string.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Work email; unique within the collection.
    pub email: String,
    /// Department name.
    pub department: String,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Annual salary at full precision.
    #[serde(with = "transport::decimal_string")]
    pub salary: Decimal,
    /// Hire timestamp, UTC.
    #[serde(with = "transport::iso_millis")]
    pub hire_date: DateTime<Utc>,
}

/// Create-operation input for an employee; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    /// Full display name.
    pub name: String,
    /// Work email; must be unique.
    pub email: String,
    /// Department name.
    pub department: String,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Annual salary.
    #[serde(with = "transport::decimal_string")]
    pub salary: Decimal,
    /// Hire timestamp.
    #[serde(with = "transport::iso_millis")]
    pub hire_date: DateTime<Utc>,
}

impl Validate for EmployeeDraft {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("department", &self.department),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} must not be blank")));
            }
        }
        Ok(())
    }
}
