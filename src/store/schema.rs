//! `SQLite` schema bootstrap logic.
//!
//! All table definitions use `CREATE TABLE IF NOT EXISTS` — safe to
//! re-run on every server startup. Produces a convergent result.
//!
//! The `employee` table is keyed by an integer rowid; the other three are
//! keyed by opaque text ids. Enumerated columns carry CHECK constraints so
//! the schema, not the application, is the authority on declared values.

use sqlx::SqlitePool;

use crate::Result;

/// Apply all table definitions to the connected `SQLite` database.
///
/// Creates all four tables idempotently. Safe to call on every startup.
///
/// # Errors
///
/// Returns `AppError::Db` if any DDL statement fails.
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<()> {
    let ddl = r"
CREATE TABLE IF NOT EXISTS employee (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    department  TEXT NOT NULL,
    status      TEXT NOT NULL CHECK(status IN ('Active','Terminated','On Leave')),
    salary      TEXT NOT NULL,
    hire_date   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS payroll_run (
    id              TEXT PRIMARY KEY NOT NULL,
    period          TEXT NOT NULL,
    pay_date        TEXT NOT NULL,
    employees_paid  INTEGER NOT NULL DEFAULT 0,
    total_amount    TEXT NOT NULL,
    status          TEXT NOT NULL CHECK(status IN ('Completed','Processing','Failed'))
);

CREATE TABLE IF NOT EXISTS job_posting (
    id           TEXT PRIMARY KEY NOT NULL,
    title        TEXT NOT NULL,
    department   TEXT NOT NULL,
    applicants   INTEGER NOT NULL DEFAULT 0,
    status       TEXT NOT NULL CHECK(status IN ('Open','Closed','Interviewing')),
    posted_date  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS time_off_request (
    id             TEXT PRIMARY KEY NOT NULL,
    employee_name  TEXT NOT NULL,
    start_date     TEXT NOT NULL,
    end_date       TEXT NOT NULL,
    days           INTEGER NOT NULL,
    leave_type     TEXT NOT NULL CHECK(leave_type IN ('Vacation','Sick Leave','Personal Day')),
    status         TEXT NOT NULL CHECK(status IN ('Pending','Approved','Rejected'))
);

CREATE INDEX IF NOT EXISTS idx_employee_name ON employee(name);
CREATE INDEX IF NOT EXISTS idx_payroll_pay_date ON payroll_run(pay_date);
CREATE INDEX IF NOT EXISTS idx_posting_posted_date ON job_posting(posted_date);
CREATE INDEX IF NOT EXISTS idx_time_off_start_date ON time_off_request(start_date);
";

    sqlx::raw_sql(ddl).execute(pool).await?;
    Ok(())
}
