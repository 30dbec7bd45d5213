//! Time-off request record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Validate;
use crate::transport;
use crate::{AppError, Result};

/// Category of requested leave.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LeaveType {
    /// Planned vacation.
    Vacation,
    /// Illness or medical care.
    #[serde(rename = "Sick Leave")]
    SickLeave,
    /// Single discretionary day.
    #[serde(rename = "Personal Day")]
    PersonalDay,
}

impl LeaveType {
    /// Stored / displayed label for the leave type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vacation => "Vacation",
            Self::SickLeave => "Sick Leave",
            Self::PersonalDay => "Personal Day",
        }
    }

    /// Parse a stored leave type label.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` when the label is not a declared type.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Vacation" => Ok(Self::Vacation),
            "Sick Leave" => Ok(Self::SickLeave),
            "Personal Day" => Ok(Self::PersonalDay),
            other => Err(AppError::Db(format!("invalid leave type: {other}"))),
        }
    }
}

/// Review status for a time-off request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeOffStatus {
    /// Awaiting manager review.
    Pending,
    /// Approved.
    Approved,
    /// Rejected.
    Rejected,
}

impl TimeOffStatus {
    /// Stored / displayed label for the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Parse a stored status label.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` when the label is not a declared status.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            other => Err(AppError::Db(format!("invalid time-off status: {other}"))),
        }
    }
}

/// One employee time-off request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    /// Store-assigned identifier.
    pub id: String,
    /// Requesting employee's display name.
    pub employee_name: String,
    /// First day of leave, UTC.
    #[serde(with = "transport::iso_millis")]
    pub start_date: DateTime<Utc>,
    /// Last day of leave, UTC.
    #[serde(with = "transport::iso_millis")]
    pub end_date: DateTime<Utc>,
    /// Working days requested.
    pub days: u32,
    /// Category of leave.
    #[serde(rename = "type")]
    pub kind: LeaveType,
    /// Review status.
    pub status: TimeOffStatus,
}

/// Create-operation input for a time-off request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequestDraft {
    /// Requesting employee's display name.
    pub employee_name: String,
    /// First day of leave.
    #[serde(with = "transport::iso_millis")]
    pub start_date: DateTime<Utc>,
    /// Last day of leave.
    #[serde(with = "transport::iso_millis")]
    pub end_date: DateTime<Utc>,
    /// Working days requested.
    pub days: u32,
    /// Category of leave.
    #[serde(rename = "type")]
    pub kind: LeaveType,
    /// Review status.
    pub status: TimeOffStatus,
}

impl Validate for TimeOffRequestDraft {
    fn validate(&self) -> Result<()> {
        if self.employee_name.trim().is_empty() {
            return Err(AppError::Validation("employeeName must not be blank".into()));
        }
        Ok(())
    }
}
