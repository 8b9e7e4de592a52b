//! HTTP interface - axum router, shared state, and error mapping.
//!
//! Handlers stay thin: decode JSON, call into [`crate::core`], and wrap the
//! result in the `{success, message, data}` envelope the clients expect.
//! Business errors map to stable HTTP statuses here and nowhere else.

/// Attendance check-in/check-out endpoints
pub mod attendance;
/// Change-request submission and review endpoints
pub mod changes;
/// Employee management endpoints
pub mod employees;
/// Payroll batch endpoints
pub mod payroll;
/// Schedule (shift planning) endpoints
pub mod schedules;

use crate::errors::Error;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

// ── Shared application state ──────────────────────────────────────────

/// State shared by all handlers.
pub struct AppState {
    /// Database connection for all operations
    pub db: DatabaseConnection,
}

/// The `Arc`-wrapped state axum clones per request.
pub type SharedState = Arc<AppState>;

// ── Response envelope ─────────────────────────────────────────────────

/// The `{success, message, data}` envelope every endpoint returns.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always true on this path; errors go through [`ApiError`]
    pub success: bool,
    /// Human-readable outcome description
    pub message: String,
    /// Endpoint-specific payload, omitted when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Builds a success envelope with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
            data: Some(data),
        })
    }
}

// ── Error handling ────────────────────────────────────────────────────

/// HTTP-facing error with a stable status code.
pub enum ApiError {
    /// 404 - the referenced record does not exist
    NotFound(String),
    /// 400 - the request is malformed or fails validation
    BadRequest(String),
    /// 403 - the acting employee's role does not permit the operation
    Forbidden(String),
    /// 409 - the operation conflicts with current state (double check-in,
    /// settled request, lifecycle violation)
    Conflict(String),
    /// 500 - unexpected failure; details are logged, not leaked
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::EmployeeNotFound { .. }
            | Error::ScheduleNotFound { .. }
            | Error::BatchNotFound { .. }
            | Error::RequestNotFound { .. } => Self::NotFound(err.to_string()),
            Error::PermissionDenied { .. } => Self::Forbidden(err.to_string()),
            Error::AlreadyCheckedIn { .. }
            | Error::AlreadyCheckedOut
            | Error::NotCheckedIn
            | Error::InvalidTransition { .. } => Self::Conflict(err.to_string()),
            Error::Config { .. }
            | Error::InvalidAmount { .. }
            | Error::OutsideCheckInWindow { .. }
            | Error::FieldNotEditable { .. } => Self::BadRequest(err.to_string()),
            Error::Database(_) | Error::Io(_) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(msg) => {
                error!(message = %msg, "internal error serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (
            status,
            Json(serde_json::json!({"success": false, "message": message})),
        )
            .into_response()
    }
}

// ── Router ────────────────────────────────────────────────────────────

/// Routes only; state and layers are attached in [`build_router`].
pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/api/attendance/check-in", post(attendance::check_in))
        .route("/api/attendance/check-out", post(attendance::check_out))
        .route(
            "/api/attendance/{employee_id}",
            get(attendance::list_for_period),
        )
        .route(
            "/api/attendance/{employee_id}/summary",
            get(attendance::summary),
        )
        .route(
            "/api/employees",
            get(employees::list).post(employees::create),
        )
        .route(
            "/api/employees/{id}",
            get(employees::get_by_id).delete(employees::deactivate),
        )
        .route(
            "/api/schedules",
            get(schedules::list_for_date).post(schedules::create),
        )
        .route(
            "/api/payroll/batches",
            get(payroll::list_batches).post(payroll::generate),
        )
        .route("/api/payroll/batches/{id}", get(payroll::get_batch))
        .route("/api/payroll/batches/{id}/approve", post(payroll::approve))
        .route("/api/payroll/batches/{id}/pay", post(payroll::pay))
        .route("/api/changes", post(changes::submit))
        .route("/api/changes/pending", get(changes::pending))
        .route(
            "/api/changes/employee/{id}",
            get(changes::history_for_employee),
        )
        .route("/api/changes/{id}/approve", post(changes::approve))
        .route("/api/changes/{id}/reject", post(changes::reject))
        .route("/health", get(health_check))
}

/// Builds the full application router with state, tracing, and CORS.
pub fn build_router(state: SharedState) -> Router {
    api_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness endpoint.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"success": true, "message": "ok"}))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = setup_test_db().await.unwrap();
        build_router(Arc::new(AppState { db }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_check_in_without_schedule_is_404() {
        let app = test_app().await;

        // Employee 1 does not exist, so there is no schedule either
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/attendance/check-in")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"employee_id": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("Schedule not found"));
    }

    #[tokio::test]
    async fn test_create_and_list_employees() {
        let app = test_app().await;

        let create = Request::builder()
            .method("POST")
            .uri("/api/employees")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{
                    "nik": "EMP-001",
                    "name": "Sawmill Sam",
                    "department": "wood_production",
                    "position": "Sawmill Operator",
                    "role": "crew",
                    "hourly_rate": 11.5,
                    "monthly_allowance": 0.0
                }"#,
            ))
            .unwrap();
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["nik"], "EMP-001");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/employees")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_schedule_then_check_in_flow() {
        let app = test_app().await;

        let create = Request::builder()
            .method("POST")
            .uri("/api/employees")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{
                    "nik": "EMP-001",
                    "name": "Crew",
                    "department": "wood_production",
                    "position": "Operator",
                    "role": "crew",
                    "hourly_rate": 10.0
                }"#,
            ))
            .unwrap();
        let response = app.clone().oneshot(create).await.unwrap();
        let body = body_json(response).await;
        let employee_id = body["data"]["id"].as_i64().unwrap();

        // Schedule the whole current UTC day so check-in lands in the window
        let today = chrono::Utc::now().date_naive();
        let schedule = Request::builder()
            .method("POST")
            .uri("/api/schedules")
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{
                    "employee_id": {employee_id},
                    "work_date": "{today}",
                    "shift_start": "00:00:00",
                    "shift_end": "23:59:59"
                }}"#
            )))
            .unwrap();
        let response = app.clone().oneshot(schedule).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The new schedule shows up on the daily roster
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/schedules?date={today}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        // Check-in now succeeds end to end
        let punch = format!(r#"{{"employee_id": {employee_id}}}"#);
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/attendance/check-in")
                    .header("content-type", "application/json")
                    .body(Body::from(punch.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);

        // A second check-in conflicts
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/attendance/check-in")
                    .header("content-type", "application/json")
                    .body(Body::from(punch))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_permission_denied_is_403() {
        let app = test_app().await;

        // Create a crew member, then have them try to generate payroll
        let create = Request::builder()
            .method("POST")
            .uri("/api/employees")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{
                    "nik": "EMP-001",
                    "name": "Crew",
                    "department": "steel_production",
                    "position": "Welder",
                    "role": "crew",
                    "hourly_rate": 12.0,
                    "monthly_allowance": 0.0
                }"#,
            ))
            .unwrap();
        let response = app.clone().oneshot(create).await.unwrap();
        let body = body_json(response).await;
        let actor_id = body["data"]["id"].as_i64().unwrap();

        let generate = Request::builder()
            .method("POST")
            .uri("/api/payroll/batches")
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{"actor_id": {actor_id}, "period_start": "2026-03-01", "period_end": "2026-03-31"}}"#
            )))
            .unwrap();
        let response = app.oneshot(generate).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
    }
}
