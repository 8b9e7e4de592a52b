//! Payroll batch endpoints - generation and the approval lifecycle.

use crate::{
    api::{ApiError, ApiResponse, SharedState},
    core::{payroll, report},
    entities::{payroll_batch::Model as BatchModel, payroll_item::Model as ItemModel},
};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body for generating a batch.
#[derive(Debug, Deserialize)]
pub struct GenerateBatchRequest {
    /// The HR employee generating the batch
    pub actor_id: i64,
    /// First day of the pay period (inclusive)
    pub period_start: NaiveDate,
    /// Last day of the pay period (inclusive)
    pub period_end: NaiveDate,
}

/// Body for approve/pay transitions.
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    /// The employee performing the transition
    pub actor_id: i64,
}

/// A batch together with its items.
#[derive(Debug, Serialize)]
pub struct BatchDetail {
    /// The batch record
    pub batch: BatchModel,
    /// One item per included employee
    pub items: Vec<ItemModel>,
    /// Human-readable summary of the batch
    pub summary: String,
}

/// `POST /api/payroll/batches`
pub async fn generate(
    State(state): State<SharedState>,
    Json(req): Json<GenerateBatchRequest>,
) -> Result<Json<ApiResponse<BatchDetail>>, ApiError> {
    let (batch, items) =
        payroll::generate_batch(&state.db, req.actor_id, req.period_start, req.period_end).await?;
    let summary = report::generate_batch_report(&state.db, batch.id).await?;
    tracing::info!("generated payroll batch:\n{summary}");
    Ok(ApiResponse::ok(
        "Payroll batch generated",
        BatchDetail {
            batch,
            items,
            summary,
        },
    ))
}

/// `GET /api/payroll/batches`
pub async fn list_batches(
    State(state): State<SharedState>,
) -> Result<Json<ApiResponse<Vec<BatchModel>>>, ApiError> {
    let batches = payroll::get_all_batches(&state.db).await?;
    Ok(ApiResponse::ok("Payroll batches", batches))
}

/// `GET /api/payroll/batches/{id}`
pub async fn get_batch(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<BatchDetail>>, ApiError> {
    let batch = payroll::require_batch(&state.db, id).await?;
    let items = payroll::get_batch_items(&state.db, id).await?;
    let summary = report::generate_batch_report(&state.db, id).await?;
    Ok(ApiResponse::ok(
        "Payroll batch",
        BatchDetail {
            batch,
            items,
            summary,
        },
    ))
}

/// `POST /api/payroll/batches/{id}/approve`
pub async fn approve(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<TransitionRequest>,
) -> Result<Json<ApiResponse<BatchModel>>, ApiError> {
    let batch = payroll::approve_batch(&state.db, id, req.actor_id).await?;
    Ok(ApiResponse::ok("Payroll batch approved", batch))
}

/// `POST /api/payroll/batches/{id}/pay`
pub async fn pay(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<TransitionRequest>,
) -> Result<Json<ApiResponse<BatchModel>>, ApiError> {
    let batch = payroll::mark_batch_paid(&state.db, id, req.actor_id).await?;
    Ok(ApiResponse::ok("Payroll batch marked paid", batch))
}
