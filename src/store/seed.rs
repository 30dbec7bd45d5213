//! Idempotent startup seeding of demo records.
//!
//! Employees are seeded per email: a row whose email already exists is
//! skipped, so re-running against a live database never violates the
//! uniqueness constraint. The other collections are seeded only when empty.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{
    EmployeeDraft, EmployeeStatus, JobPostingDraft, LeaveType, PayrollRunDraft, PayrollStatus,
    PostingStatus, TimeOffRequestDraft, TimeOffStatus,
};
use crate::{AppError, Result};

use super::{
    EmployeeStore, JobPostingStore, PayrollStore, RecordStore, StoreError, TimeOffStore,
};

/// Seed all four collections, skipping whatever already exists.
///
/// # Errors
///
/// Returns `AppError::Db` if any store operation fails.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<()> {
    seed_employees(pool).await?;
    seed_payroll(pool).await?;
    seed_postings(pool).await?;
    seed_time_off(pool).await?;
    Ok(())
}

fn store_err(err: StoreError) -> AppError {
    AppError::Db(err.to_string())
}

/// Midnight UTC on the given calendar day.
fn midnight(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::Internal(format!("invalid seed date {year}-{month:02}-{day:02}")))
}

async fn seed_employees(pool: &SqlitePool) -> Result<()> {
    let store = EmployeeStore::new(pool.clone());
    let drafts = [
        EmployeeDraft {
            name: "Alex Johnson".into(),
            email: "alex.johnson@rslimited.com".into(),
            department: "Innovations".into(),
            status: EmployeeStatus::Active,
            salary: Decimal::new(11_000_000, 2),
            hire_date: midnight(2020, 5, 15)?,
        },
        EmployeeDraft {
            name: "Sarah Williams".into(),
            email: "sarah.williams@rslimited.com".into(),
            department: "Engineering".into(),
            status: EmployeeStatus::Active,
            salary: Decimal::new(9_500_000, 2),
            hire_date: midnight(2021, 8, 1)?,
        },
        EmployeeDraft {
            name: "Robert Brown".into(),
            email: "robert.brown@rslimited.com".into(),
            department: "Energies".into(),
            status: EmployeeStatus::OnLeave,
            salary: Decimal::new(8_000_000, 2),
            hire_date: midnight(2022, 1, 20)?,
        },
        EmployeeDraft {
            name: "Emily Davis".into(),
            email: "emily.davis@rslimited.com".into(),
            department: "Administration".into(),
            status: EmployeeStatus::Active,
            salary: Decimal::new(7_200_000, 2),
            hire_date: midnight(2019, 11, 1)?,
        },
        EmployeeDraft {
            name: "Michael Wilson".into(),
            email: "michael.wilson@rslimited.com".into(),
            department: "Innovations".into(),
            status: EmployeeStatus::Terminated,
            salary: Decimal::new(13_000_000, 2),
            hire_date: midnight(2018, 3, 10)?,
        },
    ];

    for draft in drafts {
        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM employee WHERE email = ?1")
            .bind(&draft.email)
            .fetch_optional(pool)
            .await?;

        if existing.is_some() {
            info!(email = %draft.email, "skipping employee seed, already exists");
            continue;
        }

        let created = store.insert(draft).await.map_err(store_err)?;
        info!(id = %created.id, email = %created.email, "seeded employee");
    }
    Ok(())
}

async fn seed_payroll(pool: &SqlitePool) -> Result<()> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payroll_run")
        .fetch_one(pool)
        .await?;
    if count.0 > 0 {
        return Ok(());
    }

    let store = PayrollStore::new(pool.clone());
    let drafts = [
        PayrollRunDraft {
            period: "Aug 1 - Aug 31, 2025".into(),
            pay_date: midnight(2025, 9, 15)?,
            employees_paid: 122,
            total_amount: Decimal::new(12_300_000, 2),
            status: PayrollStatus::Failed,
        },
        PayrollRunDraft {
            period: "Sep 1 - Sep 30, 2025".into(),
            pay_date: midnight(2025, 10, 15)?,
            employees_paid: 123,
            total_amount: Decimal::new(12_400_000, 2),
            status: PayrollStatus::Completed,
        },
        PayrollRunDraft {
            period: "Oct 1 - Oct 31, 2025".into(),
            pay_date: midnight(2025, 11, 15)?,
            employees_paid: 124,
            total_amount: Decimal::new(12_550_000, 2),
            status: PayrollStatus::Completed,
        },
        PayrollRunDraft {
            period: "Nov 1 - Nov 30, 2025".into(),
            pay_date: midnight(2025, 12, 15)?,
            employees_paid: 125,
            total_amount: Decimal::new(12_600_000, 2),
            status: PayrollStatus::Processing,
        },
    ];

    for draft in drafts {
        let created = store.insert(draft).await.map_err(store_err)?;
        info!(id = %created.id, period = %created.period, "seeded payroll run");
    }
    Ok(())
}

async fn seed_postings(pool: &SqlitePool) -> Result<()> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_posting")
        .fetch_one(pool)
        .await?;
    if count.0 > 0 {
        return Ok(());
    }

    let store = JobPostingStore::new(pool.clone());
    let drafts = [
        JobPostingDraft {
            title: "Fusion Engineer III".into(),
            department: "Engineering".into(),
            applicants: 45,
            status: PostingStatus::Interviewing,
            posted_date: midnight(2024, 9, 15)?,
        },
        JobPostingDraft {
            title: "AI Research Scientist".into(),
            department: "Innovations".into(),
            applicants: 78,
            status: PostingStatus::Open,
            posted_date: midnight(2024, 10, 1)?,
        },
        JobPostingDraft {
            title: "Office Administrator".into(),
            department: "Administration".into(),
            applicants: 12,
            status: PostingStatus::Open,
            posted_date: midnight(2024, 10, 10)?,
        },
        JobPostingDraft {
            title: "Marketing Lead".into(),
            department: "Administration".into(),
            applicants: 0,
            status: PostingStatus::Closed,
            posted_date: midnight(2024, 8, 1)?,
        },
    ];

    for draft in drafts {
        let created = store.insert(draft).await.map_err(store_err)?;
        info!(id = %created.id, title = %created.title, "seeded job posting");
    }
    Ok(())
}

async fn seed_time_off(pool: &SqlitePool) -> Result<()> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM time_off_request")
        .fetch_one(pool)
        .await?;
    if count.0 > 0 {
        return Ok(());
    }

    let store = TimeOffStore::new(pool.clone());
    let drafts = [
        TimeOffRequestDraft {
            employee_name: "Sarah Williams".into(),
            start_date: midnight(2025, 12, 22)?,
            end_date: midnight(2025, 12, 31)?,
            days: 7,
            kind: LeaveType::Vacation,
            status: TimeOffStatus::Pending,
        },
        TimeOffRequestDraft {
            employee_name: "Alex Johnson".into(),
            start_date: midnight(2025, 11, 3)?,
            end_date: midnight(2025, 11, 4)?,
            days: 2,
            kind: LeaveType::SickLeave,
            status: TimeOffStatus::Approved,
        },
        TimeOffRequestDraft {
            employee_name: "Emily Davis".into(),
            start_date: midnight(2025, 10, 17)?,
            end_date: midnight(2025, 10, 17)?,
            days: 1,
            kind: LeaveType::PersonalDay,
            status: TimeOffStatus::Approved,
        },
        TimeOffRequestDraft {
            employee_name: "Robert Brown".into(),
            start_date: midnight(2025, 9, 1)?,
            end_date: midnight(2025, 9, 12)?,
            days: 10,
            kind: LeaveType::Vacation,
            status: TimeOffStatus::Rejected,
        },
    ];

    for draft in drafts {
        let created = store.insert(draft).await.map_err(store_err)?;
        info!(id = %created.id, employee = %created.employee_name, "seeded time-off request");
    }
    Ok(())
}
