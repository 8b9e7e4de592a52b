//! Schedule endpoints - shift planning ahead of check-in.

use crate::{
    api::{ApiError, ApiResponse, SharedState},
    core::schedule,
    entities::schedule::Model as ScheduleModel,
};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Body for creating a schedule.
#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    /// The employee assigned to the shift
    pub employee_id: i64,
    /// Calendar date of the shift
    pub work_date: NaiveDate,
    /// Scheduled shift start time
    pub shift_start: NaiveTime,
    /// Scheduled shift end time
    pub shift_end: NaiveTime,
    /// Work site, if assigned
    pub location: Option<String>,
}

/// Single-date query for the daily roster.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    /// The date to list schedules for
    pub date: NaiveDate,
}

/// `POST /api/schedules`
pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateScheduleRequest>,
) -> Result<Json<ApiResponse<ScheduleModel>>, ApiError> {
    let created = schedule::create_schedule(
        &state.db,
        req.employee_id,
        req.work_date,
        req.shift_start,
        req.shift_end,
        req.location,
    )
    .await?;
    Ok(ApiResponse::ok("Schedule created", created))
}

/// `GET /api/schedules?date=...` - the roster for one day, ordered by shift start.
pub async fn list_for_date(
    State(state): State<SharedState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<ApiResponse<Vec<ScheduleModel>>>, ApiError> {
    let schedules = schedule::get_schedules_for_date(&state.db, query.date).await?;
    Ok(ApiResponse::ok("Schedules", schedules))
}
