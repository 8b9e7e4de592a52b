//! Attendance endpoints - check-in, check-out, history, and summaries.

use crate::{
    api::{ApiError, ApiResponse, SharedState},
    core::{attendance, report},
    entities::attendance::Model as AttendanceModel,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Body for check-in and check-out. Coordinates are optional; when one of
/// lat/lon is missing the point is discarded.
#[derive(Debug, Deserialize)]
pub struct PunchRequest {
    /// The employee clocking in or out
    pub employee_id: i64,
    /// Latitude reported by the client
    pub lat: Option<f64>,
    /// Longitude reported by the client
    pub lon: Option<f64>,
}

impl PunchRequest {
    fn gps(&self) -> Option<attendance::GpsPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(attendance::GpsPoint { lat, lon }),
            _ => None,
        }
    }
}

/// Inclusive date range for history and summary queries.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// First day (inclusive)
    pub start: NaiveDate,
    /// Last day (inclusive)
    pub end: NaiveDate,
}

/// `POST /api/attendance/check-in`
pub async fn check_in(
    State(state): State<SharedState>,
    Json(req): Json<PunchRequest>,
) -> Result<Json<ApiResponse<AttendanceModel>>, ApiError> {
    let record = attendance::check_in(&state.db, req.employee_id, Utc::now(), req.gps()).await?;
    Ok(ApiResponse::ok("Checked in", record))
}

/// `POST /api/attendance/check-out`
pub async fn check_out(
    State(state): State<SharedState>,
    Json(req): Json<PunchRequest>,
) -> Result<Json<ApiResponse<AttendanceModel>>, ApiError> {
    let record = attendance::check_out(&state.db, req.employee_id, Utc::now(), req.gps()).await?;
    Ok(ApiResponse::ok("Checked out", record))
}

/// `GET /api/attendance/{employee_id}?start=...&end=...`
pub async fn list_for_period(
    State(state): State<SharedState>,
    Path(employee_id): Path<i64>,
    Query(period): Query<PeriodQuery>,
) -> Result<Json<ApiResponse<Vec<AttendanceModel>>>, ApiError> {
    let records =
        attendance::get_attendance_for_period(&state.db, employee_id, period.start, period.end)
            .await?;
    Ok(ApiResponse::ok("Attendance records", records))
}

/// `GET /api/attendance/{employee_id}/summary?start=...&end=...`
pub async fn summary(
    State(state): State<SharedState>,
    Path(employee_id): Path<i64>,
    Query(period): Query<PeriodQuery>,
) -> Result<Json<ApiResponse<report::AttendanceSummary>>, ApiError> {
    let summary =
        report::generate_attendance_summary(&state.db, employee_id, period.start, period.end)
            .await?;
    Ok(ApiResponse::ok("Attendance summary", summary))
}
