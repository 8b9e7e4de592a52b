//! Change-request endpoints - submission, the HR review queue, and history.

use crate::{
    api::{ApiError, ApiResponse, SharedState},
    core::approval,
    entities::change_request::Model as ChangeRequestModel,
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

/// Body for submitting a change request.
#[derive(Debug, Deserialize)]
pub struct SubmitChangeRequest {
    /// The employee whose record would change
    pub employee_id: i64,
    /// Whitelisted field name (`name`, `phone`, `address`, `position`)
    pub field: String,
    /// Proposed new value
    pub new_value: String,
}

/// Body for approving or rejecting a request.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// The HR employee reviewing
    pub actor_id: i64,
    /// Optional note recorded with the decision
    pub note: Option<String>,
}

/// `POST /api/changes`
pub async fn submit(
    State(state): State<SharedState>,
    Json(req): Json<SubmitChangeRequest>,
) -> Result<Json<ApiResponse<ChangeRequestModel>>, ApiError> {
    let request =
        approval::submit_change_request(&state.db, req.employee_id, req.field, req.new_value)
            .await?;
    Ok(ApiResponse::ok("Change request submitted", request))
}

/// `GET /api/changes/pending` - the HR review queue, oldest first.
pub async fn pending(
    State(state): State<SharedState>,
) -> Result<Json<ApiResponse<Vec<ChangeRequestModel>>>, ApiError> {
    let queue = approval::get_pending_requests(&state.db).await?;
    Ok(ApiResponse::ok("Pending change requests", queue))
}

/// `GET /api/changes/employee/{id}` - full history for one employee.
pub async fn history_for_employee(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ChangeRequestModel>>>, ApiError> {
    let history = approval::get_requests_for_employee(&state.db, id).await?;
    Ok(ApiResponse::ok("Change request history", history))
}

/// `POST /api/changes/{id}/approve`
pub async fn approve(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ApiResponse<ChangeRequestModel>>, ApiError> {
    let settled =
        approval::approve_change_request(&state.db, id, req.actor_id, req.note).await?;
    Ok(ApiResponse::ok("Change request approved", settled))
}

/// `POST /api/changes/{id}/reject`
pub async fn reject(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ApiResponse<ChangeRequestModel>>, ApiError> {
    let settled =
        approval::reject_change_request(&state.db, id, req.actor_id, req.note).await?;
    Ok(ApiResponse::ok("Change request rejected", settled))
}
