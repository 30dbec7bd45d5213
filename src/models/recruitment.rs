//! Job posting record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Validate;
use crate::transport;
use crate::{AppError, Result};

/// Lifecycle status for a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostingStatus {
    /// Accepting applications.
    Open,
    /// No longer accepting applications.
    Closed,
    /// Candidates are being interviewed.
    Interviewing,
}

impl PostingStatus {
    /// Stored / displayed label for the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Interviewing => "Interviewing",
        }
    }

    /// Parse a stored status label.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` when the label is not a declared status.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            "Interviewing" => Ok(Self::Interviewing),
            other => Err(AppError::Db(format!("invalid posting status: {other}"))),
        }
    }
}

/// One open or historical job posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// Store-assigned identifier.
    pub id: String,
    /// Position title.
    pub title: String,
    /// Hiring department.
    pub department: String,
    /// Applications received so far.
    pub applicants: u32,
    /// Lifecycle status.
    pub status: PostingStatus,
    /// Publication timestamp, UTC.
    #[serde(with = "transport::iso_millis")]
    pub posted_date: DateTime<Utc>,
}

/// Create-operation input for a job posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingDraft {
    /// Position title.
    pub title: String,
    /// Hiring department.
    pub department: String,
    /// Applications received so far.
    #[serde(default)]
    pub applicants: u32,
    /// Lifecycle status.
    pub status: PostingStatus,
    /// Publication timestamp.
    #[serde(with = "transport::iso_millis")]
    pub posted_date: DateTime<Utc>,
}

impl Validate for JobPostingDraft {
    fn validate(&self) -> Result<()> {
        for (field, value) in [("title", &self.title), ("department", &self.department)] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} must not be blank")));
            }
        }
        Ok(())
    }
}
