//! Payroll run record model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Validate;
use crate::transport;
use crate::{AppError, Result};

/// Processing status for a payroll run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PayrollStatus {
    /// All payments disbursed.
    Completed,
    /// Run in progress.
    Processing,
    /// Run aborted; requires operator attention.
    Failed,
}

impl PayrollStatus {
    /// Stored / displayed label for the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Processing => "Processing",
            Self::Failed => "Failed",
        }
    }

    /// Parse a stored status label.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` when the label is not a declared status.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Completed" => Ok(Self::Completed),
            "Processing" => Ok(Self::Processing),
            "Failed" => Ok(Self::Failed),
            other => Err(AppError::Db(format!("invalid payroll status: {other}"))),
        }
    }
}

/// One payroll run over a pay period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRun {
    /// Store-assigned identifier.
    pub id: String,
    /// Human-readable pay period, e.g. `"Oct 1 - Oct 31, 2025"`.
    pub period: String,
    /// Disbursement timestamp, UTC.
    #[serde(with = "transport::iso_millis")]
    pub pay_date: DateTime<Utc>,
    /// Number of employees paid in the run.
    pub employees_paid: u32,
    /// Total disbursed amount at full precision.
    #[serde(with = "transport::decimal_string")]
    pub total_amount: Decimal,
    /// Processing status.
    pub status: PayrollStatus,
}

/// Create-operation input for a payroll run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRunDraft {
    /// Human-readable pay period.
    pub period: String,
    /// Disbursement timestamp.
    #[serde(with = "transport::iso_millis")]
    pub pay_date: DateTime<Utc>,
    /// Number of employees paid.
    pub employees_paid: u32,
    /// Total disbursed amount.
    #[serde(with = "transport::decimal_string")]
    pub total_amount: Decimal,
    /// Processing status.
    pub status: PayrollStatus,
}

impl Validate for PayrollRunDraft {
    fn validate(&self) -> Result<()> {
        if self.period.trim().is_empty() {
            return Err(AppError::Validation("period must not be blank".into()));
        }
        Ok(())
    }
}
