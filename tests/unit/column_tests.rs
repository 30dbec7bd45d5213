//! Unit tests for the per-type column models.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use rs_people::models::{
    Employee, EmployeeStatus, JobPosting, PayrollRun, PayrollStatus, PostingStatus,
};
use rs_people::table::columns::{
    employee_columns, payroll_columns, recruitment_columns, time_off_columns,
};
use rs_people::table::{BadgeTone, CellValue};

fn sample_employee() -> Employee {
    Employee {
        id: "1".into(),
        name: "Alex Johnson".into(),
        email: "alex.johnson@rslimited.com".into(),
        department: "Innovations".into(),
        status: EmployeeStatus::OnLeave,
        salary: Decimal::from(110_000),
        hire_date: Utc.with_ymd_and_hms(2020, 5, 15, 0, 0, 0).unwrap(),
    }
}

#[test]
fn employee_columns_cover_the_table_shape() {
    let columns = employee_columns();
    let keys: Vec<_> = columns.iter().map(|c| c.key).collect();
    assert_eq!(keys, vec!["name", "department", "email", "status"]);
    let headers: Vec<_> = columns.iter().map(|c| c.header).collect();
    assert_eq!(headers, vec!["Employee Name", "Department", "Email", "Status"]);
}

#[test]
fn employee_status_renders_as_badge_with_tone() {
    let columns = employee_columns();
    let status_col = columns.iter().find(|c| c.key == "status").expect("status");
    let cell = (status_col.render)(&sample_employee());
    assert_eq!(
        cell,
        CellValue::Badge { label: "On Leave".into(), tone: BadgeTone::Caution }
    );
}

#[test]
fn payroll_amount_renders_as_currency() {
    let run = PayrollRun {
        id: "p1".into(),
        period: "Oct 1 - Oct 31, 2025".into(),
        pay_date: Utc.with_ymd_and_hms(2025, 11, 15, 0, 0, 0).unwrap(),
        employees_paid: 124,
        total_amount: Decimal::new(12_550_000, 2),
        status: PayrollStatus::Completed,
    };
    let columns = payroll_columns();
    let amount_col = columns
        .iter()
        .find(|c| c.key == "totalAmount")
        .expect("totalAmount");
    assert_eq!(
        (amount_col.render)(&run),
        CellValue::Emphasis("$125,500.00".into())
    );

    let date_col = columns.iter().find(|c| c.key == "payDate").expect("payDate");
    assert_eq!((date_col.render)(&run), CellValue::Text("2025-11-15".into()));
}

#[test]
fn payroll_and_recruitment_expose_action_columns() {
    let payroll = payroll_columns();
    let action = payroll.iter().find(|c| c.key == "actions").expect("actions");
    let run = PayrollRun {
        id: "p1".into(),
        period: "x".into(),
        pay_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        employees_paid: 1,
        total_amount: Decimal::ONE,
        status: PayrollStatus::Failed,
    };
    assert_eq!((action.render)(&run), CellValue::Action("View Report".into()));

    let posting = JobPosting {
        id: "j1".into(),
        title: "Fusion Engineer III".into(),
        department: "Engineering".into(),
        applicants: 45,
        status: PostingStatus::Interviewing,
        posted_date: Utc.with_ymd_and_hms(2024, 9, 15, 0, 0, 0).unwrap(),
    };
    let recruitment = recruitment_columns();
    let action = recruitment
        .iter()
        .find(|c| c.key == "actions")
        .expect("actions");
    assert_eq!((action.render)(&posting), CellValue::Action("View".into()));
}

#[test]
fn time_off_columns_cover_the_table_shape() {
    let keys: Vec<_> = time_off_columns().iter().map(|c| c.key).collect();
    assert_eq!(
        keys,
        vec!["employeeName", "startDate", "endDate", "days", "type", "status", "actions"]
    );
}
