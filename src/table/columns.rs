//! Column models for the four record types.
//!
//! Pure declarative mappings from record type to an ordered column list.
//! Every render function is total over its record type and does no I/O.

use crate::models::{Employee, JobPosting, PayrollRun, TimeOffRequest};

use super::{format_usd, BadgeTone, CellValue, Column};

fn badge(label: &str) -> CellValue {
    CellValue::Badge {
        label: label.to_owned(),
        tone: BadgeTone::for_status(label),
    }
}

fn day(ts: &chrono::DateTime<chrono::Utc>) -> CellValue {
    CellValue::Text(ts.format("%Y-%m-%d").to_string())
}

/// Column model for the employees table.
#[must_use]
pub fn employee_columns() -> Vec<Column<Employee>> {
    vec![
        Column {
            key: "name",
            header: "Employee Name",
            render: |e| CellValue::Emphasis(e.name.clone()),
        },
        Column {
            key: "department",
            header: "Department",
            render: |e| CellValue::Text(e.department.clone()),
        },
        Column {
            key: "email",
            header: "Email",
            render: |e| CellValue::Text(e.email.clone()),
        },
        Column {
            key: "status",
            header: "Status",
            render: |e| badge(e.status.as_str()),
        },
    ]
}

/// Column model for the payroll runs table.
#[must_use]
pub fn payroll_columns() -> Vec<Column<PayrollRun>> {
    vec![
        Column {
            key: "period",
            header: "Pay Period",
            render: |r| CellValue::Emphasis(r.period.clone()),
        },
        Column {
            key: "payDate",
            header: "Payment Date",
            render: |r| day(&r.pay_date),
        },
        Column {
            key: "employeesPaid",
            header: "Employees Paid",
            render: |r| CellValue::Text(r.employees_paid.to_string()),
        },
        Column {
            key: "totalAmount",
            header: "Total Amount",
            render: |r| CellValue::Emphasis(format_usd(&r.total_amount)),
        },
        Column {
            key: "status",
            header: "Status",
            render: |r| badge(r.status.as_str()),
        },
        Column {
            key: "actions",
            header: "Actions",
            render: |_| CellValue::Action("View Report".into()),
        },
    ]
}

/// Column model for the job postings table.
#[must_use]
pub fn recruitment_columns() -> Vec<Column<JobPosting>> {
    vec![
        Column {
            key: "title",
            header: "Job Title",
            render: |p| CellValue::Emphasis(p.title.clone()),
        },
        Column {
            key: "department",
            header: "Department",
            render: |p| CellValue::Text(p.department.clone()),
        },
        Column {
            key: "applicants",
            header: "Applicants",
            render: |p| CellValue::Emphasis(p.applicants.to_string()),
        },
        Column {
            key: "postedDate",
            header: "Posted Date",
            render: |p| day(&p.posted_date),
        },
        Column {
            key: "status",
            header: "Status",
            render: |p| badge(p.status.as_str()),
        },
        Column {
            key: "actions",
            header: "Actions",
            render: |_| CellValue::Action("View".into()),
        },
    ]
}

/// Column model for the time-off requests table.
#[must_use]
pub fn time_off_columns() -> Vec<Column<TimeOffRequest>> {
    vec![
        Column {
            key: "employeeName",
            header: "Employee",
            render: |r| CellValue::Emphasis(r.employee_name.clone()),
        },
        Column {
            key: "startDate",
            header: "Start Date",
            render: |r| day(&r.start_date),
        },
        Column {
            key: "endDate",
            header: "End Date",
            render: |r| day(&r.end_date),
        },
        Column {
            key: "days",
            header: "Days",
            render: |r| CellValue::Emphasis(r.days.to_string()),
        },
        Column {
            key: "type",
            header: "Type",
            render: |r| CellValue::Text(r.kind.as_str().to_owned()),
        },
        Column {
            key: "status",
            header: "Status",
            render: |r| badge(r.status.as_str()),
        },
        Column {
            key: "actions",
            header: "Actions",
            render: |_| CellValue::Action("Review".into()),
        },
    ]
}
