//! HTTP surface for the record gateways.
//!
//! Each record collection exposes the same four-operation shape:
//!
//! | Method | Path             | Success | Failure                  |
//! |--------|------------------|---------|--------------------------|
//! | GET    | `/api/{c}`       | 200     | 500                      |
//! | GET    | `/api/{c}/{id}`  | 200     | 400 blank id, 404, 500   |
//! | POST   | `/api/{c}`       | 201     | 400 validation, 409, 500 |
//! | DELETE | `/api/{c}/{id}`  | 204     | 400 blank id, 404, 500   |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::gateway::RecordGateway;
use crate::models::Validate;
use crate::store::{
    EmployeeStore, JobPostingStore, PayrollStore, RecordStore, TimeOffStore,
};
use crate::AppError;

/// Handler for `GET /health` — returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// Build the full application router over the shared pool.
#[must_use]
pub fn router(pool: &SqlitePool) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(resource_routes(
            "/api/employees",
            RecordGateway::new(Arc::new(EmployeeStore::new(pool.clone()))),
        ))
        .merge(resource_routes(
            "/api/payroll",
            RecordGateway::new(Arc::new(PayrollStore::new(pool.clone()))),
        ))
        .merge(resource_routes(
            "/api/recruitment",
            RecordGateway::new(Arc::new(JobPostingStore::new(pool.clone()))),
        ))
        .merge(resource_routes(
            "/api/time-off",
            RecordGateway::new(Arc::new(TimeOffStore::new(pool.clone()))),
        ))
}

/// Mount the four-operation route shape for one record collection.
fn resource_routes<S>(base: &'static str, gateway: RecordGateway<S>) -> Router
where
    S: RecordStore + 'static,
    S::Record: Serialize,
    S::Draft: DeserializeOwned + Validate,
{
    Router::new()
        .route(base, get(list_records::<S>).post(create_record::<S>))
        .route(
            &format!("{base}/{{id}}"),
            get(get_record::<S>).delete(delete_record::<S>),
        )
        .with_state(Arc::new(gateway))
}

async fn list_records<S>(
    State(gateway): State<Arc<RecordGateway<S>>>,
) -> Result<Json<Vec<S::Record>>, AppError>
where
    S: RecordStore,
    S::Record: Serialize,
{
    gateway.list().await.map(Json)
}

async fn get_record<S>(
    State(gateway): State<Arc<RecordGateway<S>>>,
    Path(id): Path<String>,
) -> Result<Json<S::Record>, AppError>
where
    S: RecordStore,
    S::Record: Serialize,
{
    require_id(&id)?;
    gateway.get(&id).await.map(Json)
}

async fn create_record<S>(
    State(gateway): State<Arc<RecordGateway<S>>>,
    payload: Result<Json<S::Draft>, JsonRejection>,
) -> Result<(StatusCode, Json<S::Record>), AppError>
where
    S: RecordStore,
    S::Record: Serialize,
    S::Draft: DeserializeOwned + Validate,
{
    let Json(draft) = payload.map_err(|rej| AppError::Validation(rej.body_text()))?;
    let created = gateway.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_record<S>(
    State(gateway): State<Arc<RecordGateway<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError>
where
    S: RecordStore,
{
    require_id(&id)?;
    gateway.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reject blank path ids before they reach the gateway.
fn require_id(id: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::Validation("record id is required".into()));
    }
    Ok(())
}
