//! Employee management endpoints.

use crate::{
    api::{ApiError, ApiResponse, SharedState},
    core::employee,
    entities::{EmployeeRole, employee::Model as EmployeeModel},
    errors::Error,
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

/// Body for creating an employee.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Employee number (NIK), unique
    pub nik: String,
    /// Full name
    pub name: String,
    /// Department
    pub department: String,
    /// Job title
    pub position: String,
    /// Workflow role
    pub role: EmployeeRole,
    /// Hourly pay rate
    pub hourly_rate: f64,
    /// Flat monthly allowance
    #[serde(default)]
    pub monthly_allowance: f64,
}

/// `GET /api/employees`
pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<ApiResponse<Vec<EmployeeModel>>>, ApiError> {
    let employees = employee::get_all_active_employees(&state.db).await?;
    Ok(ApiResponse::ok("Active employees", employees))
}

/// `POST /api/employees`
pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<ApiResponse<EmployeeModel>>, ApiError> {
    let created = employee::create_employee(
        &state.db,
        req.nik,
        req.name,
        req.department,
        req.position,
        req.role,
        req.hourly_rate,
        req.monthly_allowance,
    )
    .await?;
    Ok(ApiResponse::ok("Employee created", created))
}

/// `GET /api/employees/{id}`
pub async fn get_by_id(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<EmployeeModel>>, ApiError> {
    let found = employee::get_employee_by_id(&state.db, id)
        .await?
        .ok_or(Error::EmployeeNotFound { id: id.to_string() })?;
    Ok(ApiResponse::ok("Employee", found))
}

/// `DELETE /api/employees/{id}` - soft deactivation.
pub async fn deactivate(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<EmployeeModel>>, ApiError> {
    let deactivated = employee::deactivate_employee(&state.db, id).await?;
    Ok(ApiResponse::ok("Employee deactivated", deactivated))
}
