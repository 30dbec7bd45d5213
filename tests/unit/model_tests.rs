//! Unit tests for record models and draft validation.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use rs_people::models::{
    EmployeeDraft, EmployeeStatus, LeaveType, PayrollStatus, PostingStatus, TimeOffStatus,
    Validate,
};
use rs_people::AppError;

#[test]
fn employee_status_labels_round_trip() {
    for status in [
        EmployeeStatus::Active,
        EmployeeStatus::Terminated,
        EmployeeStatus::OnLeave,
    ] {
        assert_eq!(EmployeeStatus::parse(status.as_str()).expect("parse"), status);
    }
}

#[test]
fn multi_word_labels_serialize_with_spaces() {
    assert_eq!(
        serde_json::to_value(EmployeeStatus::OnLeave).expect("serialize"),
        serde_json::json!("On Leave")
    );
    assert_eq!(
        serde_json::to_value(LeaveType::SickLeave).expect("serialize"),
        serde_json::json!("Sick Leave")
    );
    assert_eq!(
        serde_json::to_value(LeaveType::PersonalDay).expect("serialize"),
        serde_json::json!("Personal Day")
    );
}

#[test]
fn undeclared_status_label_is_rejected() {
    let err = EmployeeStatus::parse("Retired").unwrap_err();
    assert!(matches!(err, AppError::Db(_)));
    assert!(err.to_string().contains("Retired"));

    assert!(PayrollStatus::parse("Done").is_err());
    assert!(PostingStatus::parse("Draft").is_err());
    assert!(TimeOffStatus::parse("Maybe").is_err());
    assert!(LeaveType::parse("Sabbatical").is_err());
}

fn valid_draft() -> EmployeeDraft {
    EmployeeDraft {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        department: "Engineering".into(),
        status: EmployeeStatus::Active,
        salary: Decimal::from(90_000),
        hire_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn complete_draft_passes_validation() {
    assert!(valid_draft().validate().is_ok());
}

#[test]
fn blank_required_field_fails_validation() {
    let mut draft = valid_draft();
    draft.email = "   ".into();
    let err = draft.validate().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("email"));
}

#[test]
fn draft_deserializes_from_camel_case_wire_form() {
    let raw = r#"{
        "name": "Jane Doe",
        "email": "jane@x.com",
        "department": "Engineering",
        "salary": 90000,
        "hireDate": "2024-01-01T00:00:00.000Z",
        "status": "Active"
    }"#;
    let draft: EmployeeDraft = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(draft.salary, Decimal::from(90_000));
    assert_eq!(draft.status, EmployeeStatus::Active);
}

#[test]
fn draft_with_missing_required_field_fails_deserialization() {
    let raw = r#"{ "name": "Jane Doe" }"#;
    assert!(serde_json::from_str::<EmployeeDraft>(raw).is_err());
}
