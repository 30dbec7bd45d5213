//! Domain record models for the four personnel collections.

pub mod employee;
pub mod payroll;
pub mod recruitment;
pub mod time_off;

pub use employee::{Employee, EmployeeDraft, EmployeeStatus};
pub use payroll::{PayrollRun, PayrollRunDraft, PayrollStatus};
pub use recruitment::{JobPosting, JobPostingDraft, PostingStatus};
pub use time_off::{LeaveType, TimeOffRequest, TimeOffRequestDraft, TimeOffStatus};

/// Structural validation applied to create-operation drafts at the gateway
/// boundary.
///
/// Only shape-level checks live here (blank required fields). Enumerated
/// values and uniqueness remain the store schema's concern; violations
/// surface as store errors.
pub trait Validate {
    /// Reject a draft whose required fields are missing or malformed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` describing the offending field.
    fn validate(&self) -> crate::Result<()>;
}
