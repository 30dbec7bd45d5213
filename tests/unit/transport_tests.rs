//! Unit tests for the serialization adapter.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use rs_people::models::{Employee, EmployeeStatus};
use rs_people::transport;
use rs_people::AppError;

#[test]
fn timestamp_encodes_in_canonical_millis_form() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(transport::encode_timestamp(&ts), "2024-01-01T00:00:00.000Z");
}

#[test]
fn timestamp_encoding_is_always_utc() {
    let ts = chrono::DateTime::parse_from_rfc3339("2024-06-15T10:30:00+05:30")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(transport::encode_timestamp(&ts), "2024-06-15T05:00:00.000Z");
}

#[test]
fn timestamp_round_trips_through_parse() {
    let ts = Utc.with_ymd_and_hms(2021, 8, 1, 12, 34, 56).unwrap();
    let encoded = transport::encode_timestamp(&ts);
    let parsed = transport::parse_timestamp("hire_date", &encoded).expect("parse");
    assert_eq!(parsed, ts);
}

#[test]
fn invalid_timestamp_is_a_serialization_error() {
    let err = transport::parse_timestamp("hire_date", "not-a-date").unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
    assert!(err.to_string().contains("hire_date"));
}

#[test]
fn decimal_parses_at_full_precision() {
    let parsed = transport::parse_decimal("salary", "90000.1234567890123").expect("parse");
    assert_eq!(parsed.to_string(), "90000.1234567890123");
}

#[test]
fn invalid_decimal_is_a_serialization_error() {
    let err = transport::parse_decimal("salary", "ninety thousand").unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
    assert!(err.to_string().contains("salary"));
}

fn jane() -> Employee {
    Employee {
        id: "1".into(),
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        department: "Engineering".into(),
        status: EmployeeStatus::Active,
        salary: Decimal::from(90_000),
        hire_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn employee_wire_form_uses_string_salary_and_iso_date() {
    let value = serde_json::to_value(jane()).expect("serialize");
    assert_eq!(value["salary"], serde_json::json!("90000"));
    assert_eq!(value["hireDate"], serde_json::json!("2024-01-01T00:00:00.000Z"));
    assert_eq!(value["status"], serde_json::json!("Active"));
}

#[test]
fn employee_round_trips_through_wire_form() {
    let original = jane();
    let json = serde_json::to_string(&original).expect("serialize");
    let back: Employee = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, original);
}

#[test]
fn decimal_field_accepts_plain_json_numbers_on_input() {
    let raw = r#"{
        "id": "1",
        "name": "Jane Doe",
        "email": "jane@x.com",
        "department": "Engineering",
        "status": "Active",
        "salary": 90000,
        "hireDate": "2024-01-01T00:00:00.000Z"
    }"#;
    let parsed: Employee = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(parsed.salary, Decimal::from(90_000));
}

#[test]
fn no_wire_field_is_dropped_or_nulled() {
    let value = serde_json::to_value(jane()).expect("serialize");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 7);
    assert!(object.values().all(|v| !v.is_null()));
}
