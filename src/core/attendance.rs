//! Attendance business logic - check-in and check-out against schedules.
//!
//! Check-in requires a matching schedule on the current date, rejects double
//! check-ins deterministically, and only accepts timestamps inside a window
//! around the scheduled shift. Check-out requires a prior check-in. Both ends
//! accept optional GPS coordinates from the mobile client.

use crate::{
    core::schedule::get_schedule_for,
    entities::{Attendance, attendance, schedule},
    errors::{Error, Result},
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// How early before shift start a check-in is accepted, in minutes.
pub const EARLY_CHECK_IN_GRACE_MINUTES: i64 = 60;

/// Optional GPS coordinates reported by the client at check-in/check-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsPoint {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

/// The accepted check-in window for a schedule, in UTC instants.
fn check_in_window(schedule: &schedule::Model) -> (DateTime<Utc>, DateTime<Utc>) {
    let shift_start = schedule.work_date.and_time(schedule.shift_start).and_utc();
    let shift_end = schedule.work_date.and_time(schedule.shift_end).and_utc();
    (
        shift_start - Duration::minutes(EARLY_CHECK_IN_GRACE_MINUTES),
        shift_end,
    )
}

/// Records a check-in for the employee's schedule on the date of `now`.
///
/// Fails with [`Error::ScheduleNotFound`] when no schedule exists,
/// [`Error::AlreadyCheckedIn`] when an attendance row already exists for the
/// schedule, and [`Error::OutsideCheckInWindow`] when `now` falls outside the
/// accepted window. Lateness relative to shift start is recorded in minutes.
pub async fn check_in(
    db: &DatabaseConnection,
    employee_id: i64,
    now: DateTime<Utc>,
    gps: Option<GpsPoint>,
) -> Result<attendance::Model> {
    let work_date = now.date_naive();

    // Schedule lookup, duplicate check, and insert share a transaction;
    // the unique index on schedule_id backstops concurrent check-ins.
    let txn = db.begin().await?;

    let schedule = get_schedule_for(&txn, employee_id, work_date)
        .await?
        .ok_or(Error::ScheduleNotFound {
            employee_id,
            date: work_date,
        })?;

    let existing = Attendance::find()
        .filter(attendance::Column::ScheduleId.eq(schedule.id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(Error::AlreadyCheckedIn { date: work_date });
    }

    let (window_start, window_end) = check_in_window(&schedule);
    if now < window_start || now > window_end {
        return Err(Error::OutsideCheckInWindow {
            at: now,
            window_start,
            window_end,
        });
    }

    let shift_start = schedule.work_date.and_time(schedule.shift_start).and_utc();
    let late_minutes = (now - shift_start).num_minutes().max(0);

    let model = attendance::ActiveModel {
        schedule_id: Set(schedule.id),
        employee_id: Set(employee_id),
        work_date: Set(work_date),
        check_in: Set(now),
        check_out: Set(None),
        check_in_lat: Set(gps.map(|p| p.lat)),
        check_in_lon: Set(gps.map(|p| p.lon)),
        check_out_lat: Set(None),
        check_out_lon: Set(None),
        // num_minutes of a bounded shift offset always fits in i32
        late_minutes: Set(i32::try_from(late_minutes).unwrap_or(i32::MAX)),
        ..Default::default()
    };

    let result = model.insert(&txn).await?;
    txn.commit().await?;

    Ok(result)
}

/// Records a check-out for the employee's open attendance.
///
/// Resolves today's attendance first; when a shift runs past midnight the
/// check-in lives on the previous date, so we fall back to the most recent
/// attendance that is still open. Fails with [`Error::NotCheckedIn`] when
/// neither exists, and [`Error::AlreadyCheckedOut`] when the record is
/// already closed.
pub async fn check_out(
    db: &DatabaseConnection,
    employee_id: i64,
    now: DateTime<Utc>,
    gps: Option<GpsPoint>,
) -> Result<attendance::Model> {
    let work_date = now.date_naive();

    let attendance = match get_attendance_for(db, employee_id, work_date).await? {
        Some(attendance) => attendance,
        None => get_open_attendance(db, employee_id)
            .await?
            .ok_or(Error::NotCheckedIn)?,
    };

    if attendance.check_out.is_some() {
        return Err(Error::AlreadyCheckedOut);
    }

    let mut active: attendance::ActiveModel = attendance.into();
    active.check_out = Set(Some(now));
    active.check_out_lat = Set(gps.map(|p| p.lat));
    active.check_out_lon = Set(gps.map(|p| p.lon));
    active.update(db).await.map_err(Into::into)
}

/// Finds the employee's most recent attendance without a check-out, if any.
async fn get_open_attendance(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<Option<attendance::Model>> {
    Attendance::find()
        .filter(attendance::Column::EmployeeId.eq(employee_id))
        .filter(attendance::Column::CheckOut.is_null())
        .order_by_desc(attendance::Column::WorkDate)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds the attendance record for an employee on a date, if any.
pub async fn get_attendance_for<C>(
    db: &C,
    employee_id: i64,
    work_date: NaiveDate,
) -> Result<Option<attendance::Model>>
where
    C: ConnectionTrait,
{
    Attendance::find()
        .filter(attendance::Column::EmployeeId.eq(employee_id))
        .filter(attendance::Column::WorkDate.eq(work_date))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists an employee's attendance inside a date range (inclusive), ordered by date.
/// This is the input to payroll generation and attendance reports.
pub async fn get_attendance_for_period<C>(
    db: &C,
    employee_id: i64,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> Result<Vec<attendance::Model>>
where
    C: ConnectionTrait,
{
    Attendance::find()
        .filter(attendance::Column::EmployeeId.eq(employee_id))
        .filter(attendance::Column::WorkDate.gte(period_start))
        .filter(attendance::Column::WorkDate.lte(period_end))
        .order_by_asc(attendance::Column::WorkDate)
        .all(db)
        .await
        .map_err(Into::into)
}
