//! Report generation business logic.
//!
//! Provides attendance summaries for a period and human-readable payroll
//! batch summaries. All functions are framework-agnostic and return
//! structured data (or plain strings) the API layer can serve directly.

use crate::{
    core::{
        attendance::get_attendance_for_period, employee::require_employee, payroll,
        schedule::get_schedules_for_period,
    },
    entities::{employee, payroll_batch, payroll_item},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// Per-employee attendance summary over a date range.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceSummary {
    /// Employee the summary covers
    pub employee_id: i64,
    /// First day of the range (inclusive)
    pub period_start: NaiveDate,
    /// Last day of the range (inclusive)
    pub period_end: NaiveDate,
    /// Shifts scheduled in the range
    pub days_scheduled: usize,
    /// Shifts with a check-in
    pub days_present: usize,
    /// Shifts where the check-in was late
    pub days_late: usize,
    /// Total minutes of lateness across the range
    pub total_late_minutes: i64,
    /// Hours between check-in and check-out, summed over completed shifts
    pub total_hours_worked: f64,
}

/// Builds the attendance summary for one employee over a period.
pub async fn generate_attendance_summary(
    db: &DatabaseConnection,
    employee_id: i64,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> Result<AttendanceSummary> {
    let schedules = get_schedules_for_period(db, employee_id, period_start, period_end).await?;
    let attendance = get_attendance_for_period(db, employee_id, period_start, period_end).await?;

    let days_present = attendance.len();
    let days_late = attendance.iter().filter(|a| a.late_minutes > 0).count();
    let total_late_minutes = attendance
        .iter()
        .map(|a| i64::from(a.late_minutes))
        .sum::<i64>();
    let total_hours_worked = attendance
        .iter()
        .filter_map(|a| a.check_out.map(|out| (out - a.check_in).num_minutes()))
        .sum::<i64>() as f64
        / 60.0;

    Ok(AttendanceSummary {
        employee_id,
        period_start,
        period_end,
        days_scheduled: schedules.len(),
        days_present,
        days_late,
        total_late_minutes,
        total_hours_worked,
    })
}

/// Builds the human-readable summary for a stored batch.
///
/// Loads the batch, its items, and the named employees, then formats them
/// via [`format_batch_summary`]. Served with the batch detail for the
/// director's review view.
pub async fn generate_batch_report(db: &DatabaseConnection, batch_id: i64) -> Result<String> {
    let batch = payroll::require_batch(db, batch_id).await?;
    let items = payroll::get_batch_items(db, batch_id).await?;

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let employee = require_employee(db, item.employee_id).await?;
        lines.push((employee, item));
    }

    Ok(format_batch_summary(&batch, &lines))
}

/// Formats a payroll batch and its items into a human-readable summary.
#[must_use]
pub fn format_batch_summary(
    batch: &payroll_batch::Model,
    items: &[(employee::Model, payroll_item::Model)],
) -> String {
    use std::fmt::Write;

    let mut summary = format!(
        "Payroll batch #{} - {} to {} - {} - {} employees\n",
        batch.id,
        batch.period_start.format("%Y-%m-%d"),
        batch.period_end.format("%Y-%m-%d"),
        batch.status.as_str(),
        items.len()
    );

    let total: f64 = items.iter().map(|(_, item)| item.net_pay).sum();

    for (employee, item) in items {
        // write! to a String is infallible
        writeln!(
            summary,
            "  {} ({}) - {:.1}h + {:.1}h OT | basic {:.2} + OT {:.2} + allow {:.2} - deduct {:.2} = net {:.2}",
            employee.name,
            employee.nik,
            item.regular_hours,
            item.overtime_hours,
            item.basic_pay,
            item.overtime_pay,
            item.allowances,
            item.deductions,
            item.net_pay
        )
        .unwrap();
    }

    writeln!(summary, "  Total net pay: {total:.2}").unwrap();

    summary
}
