//! Unit tests for the application error taxonomy.

use axum::http::StatusCode;

use rs_people::AppError;

#[test]
fn display_prefixes_identify_the_variant() {
    assert_eq!(
        AppError::NotFound("employee \"9\" not found".into()).to_string(),
        "not found: employee \"9\" not found"
    );
    assert!(AppError::Conflict("dup".into()).to_string().starts_with("conflict:"));
    assert!(AppError::Validation("bad".into()).to_string().starts_with("validation:"));
    assert!(AppError::Serialization("x".into())
        .to_string()
        .starts_with("serialization:"));
    assert!(AppError::Db("x".into()).to_string().starts_with("db:"));
}

#[test]
fn status_mapping_follows_the_api_contract() {
    assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    assert_eq!(AppError::Conflict("x".into()).status(), StatusCode::CONFLICT);
    assert_eq!(AppError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        AppError::Serialization("x".into()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(AppError::Db("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        AppError::Internal("x".into()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn internal_detail_never_reaches_the_caller() {
    let err = AppError::Db("table employee is corrupt at page 7".into());
    assert_eq!(err.public_message(), "internal server error");

    let err = AppError::Serialization("field salary: invalid decimal".into());
    assert_eq!(err.public_message(), "internal server error");
}

#[test]
fn caller_errors_keep_their_message() {
    let err = AppError::NotFound("employee \"9\" not found".into());
    assert_eq!(err.public_message(), "employee \"9\" not found");

    let err = AppError::Validation("record id is required".into());
    assert_eq!(err.public_message(), "record id is required");
}

#[test]
fn sqlx_errors_convert_to_db() {
    let err: AppError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, AppError::Db(_)));
}
