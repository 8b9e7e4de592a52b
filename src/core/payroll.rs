//! Payroll business logic - pay arithmetic and the batch approval lifecycle.
//!
//! A batch covers a pay period. Generation walks every active employee's
//! completed attendance in the period, splits worked time into regular and
//! overtime hours at the scheduled shift length, prices late minutes as
//! deductions, and stores one payroll item per employee. The batch then moves
//! pending -> approved -> paid under role gates; no transition moves backward.

use crate::{
    core::{attendance::get_attendance_for_period, employee::require_employee},
    entities::{
        BatchStatus, Employee, PayrollBatch, PayrollItem, Schedule, employee, payroll_batch,
        payroll_item,
    },
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Overtime is paid at this multiple of the hourly rate.
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// The monetary components of one employee's pay for a period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayComponents {
    /// `regular_hours * hourly_rate`
    pub basic_pay: f64,
    /// `overtime_hours * hourly_rate * 1.5`
    pub overtime_pay: f64,
    /// Flat allowances for the period
    pub allowances: f64,
    /// Deductions for the period
    pub deductions: f64,
    /// `basic_pay + overtime_pay + allowances - deductions`
    pub net_pay: f64,
}

/// Rounds a monetary value to 2 decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the pay components for one employee.
///
/// All inputs must be finite and non-negative; amounts are rounded to
/// 2 decimals component by component so the stored invariant
/// `net = basic + overtime + allowances - deductions` holds exactly.
pub fn compute_pay(
    regular_hours: f64,
    overtime_hours: f64,
    hourly_rate: f64,
    allowances: f64,
    deductions: f64,
) -> Result<PayComponents> {
    for amount in [
        regular_hours,
        overtime_hours,
        hourly_rate,
        allowances,
        deductions,
    ] {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount { amount });
        }
    }

    let basic_pay = round2(regular_hours * hourly_rate);
    let overtime_pay = round2(overtime_hours * hourly_rate * OVERTIME_MULTIPLIER);
    let allowances = round2(allowances);
    let deductions = round2(deductions);
    let net_pay = round2(basic_pay + overtime_pay + allowances - deductions);

    Ok(PayComponents {
        basic_pay,
        overtime_pay,
        allowances,
        deductions,
        net_pay,
    })
}

/// Generates a payroll batch for a pay period (inclusive date range).
///
/// Only HR roles may generate. Every active employee with at least one
/// completed attendance record in the period receives one payroll item.
/// The whole generation runs inside a single database transaction.
pub async fn generate_batch(
    db: &DatabaseConnection,
    actor_id: i64,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> Result<(payroll_batch::Model, Vec<payroll_item::Model>)> {
    let actor = require_employee(db, actor_id).await?;
    if !actor.role.can_generate_payroll() {
        return Err(Error::PermissionDenied {
            role: actor.role.as_str().to_string(),
            action: "generate a payroll batch".to_string(),
        });
    }

    if period_end < period_start {
        return Err(Error::Config {
            message: format!("Pay period end {period_end} precedes start {period_start}"),
        });
    }

    let txn = db.begin().await?;

    let batch = payroll_batch::ActiveModel {
        period_start: Set(period_start),
        period_end: Set(period_end),
        status: Set(BatchStatus::Pending),
        created_by: Set(actor_id),
        approved_by: Set(None),
        approved_at: Set(None),
        paid_at: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let batch = batch.insert(&txn).await?;

    let employees = Employee::find()
        .filter(employee::Column::IsActive.eq(true))
        .order_by_asc(employee::Column::Name)
        .all(&txn)
        .await?;

    let mut items = Vec::new();
    for emp in employees {
        let attendance = get_attendance_for_period(&txn, emp.id, period_start, period_end).await?;
        if attendance.is_empty() {
            continue;
        }

        let mut regular_hours = 0.0_f64;
        let mut overtime_hours = 0.0_f64;
        let mut late_minutes = 0_i64;

        for record in &attendance {
            late_minutes += i64::from(record.late_minutes);

            let Some(check_out) = record.check_out else {
                // Open attendance earns nothing until closed
                continue;
            };

            let schedule = Schedule::find_by_id(record.schedule_id)
                .one(&txn)
                .await?
                .ok_or(Error::ScheduleNotFound {
                    employee_id: emp.id,
                    date: record.work_date,
                })?;

            let worked = (check_out - record.check_in).num_minutes() as f64 / 60.0;
            let scheduled =
                (schedule.shift_end - schedule.shift_start).num_minutes() as f64 / 60.0;

            regular_hours += worked.min(scheduled);
            overtime_hours += (worked - scheduled).max(0.0);
        }

        let deductions = late_minutes as f64 / 60.0 * emp.hourly_rate;
        let pay = compute_pay(
            regular_hours,
            overtime_hours,
            emp.hourly_rate,
            emp.monthly_allowance,
            deductions,
        )?;

        let item = payroll_item::ActiveModel {
            batch_id: Set(batch.id),
            employee_id: Set(emp.id),
            regular_hours: Set(regular_hours),
            overtime_hours: Set(overtime_hours),
            hourly_rate: Set(emp.hourly_rate),
            basic_pay: Set(pay.basic_pay),
            overtime_pay: Set(pay.overtime_pay),
            allowances: Set(pay.allowances),
            deductions: Set(pay.deductions),
            net_pay: Set(pay.net_pay),
            ..Default::default()
        };
        items.push(item.insert(&txn).await?);
    }

    txn.commit().await?;

    info!(
        batch_id = batch.id,
        items = items.len(),
        %period_start,
        %period_end,
        "generated payroll batch"
    );

    Ok((batch, items))
}

/// Approves a pending batch. Only the director may approve, and only from
/// the pending state.
pub async fn approve_batch(
    db: &DatabaseConnection,
    batch_id: i64,
    actor_id: i64,
) -> Result<payroll_batch::Model> {
    let actor = require_employee(db, actor_id).await?;
    if !actor.role.can_approve_payroll() {
        return Err(Error::PermissionDenied {
            role: actor.role.as_str().to_string(),
            action: "approve a payroll batch".to_string(),
        });
    }

    let batch = require_batch(db, batch_id).await?;
    if batch.status != BatchStatus::Pending {
        return Err(Error::InvalidTransition {
            from: batch.status.as_str().to_string(),
            to: BatchStatus::Approved.as_str().to_string(),
        });
    }

    let mut active: payroll_batch::ActiveModel = batch.into();
    active.status = Set(BatchStatus::Approved);
    active.approved_by = Set(Some(actor_id));
    active.approved_at = Set(Some(Utc::now()));
    active.update(db).await.map_err(Into::into)
}

/// Marks an approved batch as paid. Only finance may pay, and only from the
/// approved state.
pub async fn mark_batch_paid(
    db: &DatabaseConnection,
    batch_id: i64,
    actor_id: i64,
) -> Result<payroll_batch::Model> {
    let actor = require_employee(db, actor_id).await?;
    if !actor.role.can_mark_paid() {
        return Err(Error::PermissionDenied {
            role: actor.role.as_str().to_string(),
            action: "mark a payroll batch as paid".to_string(),
        });
    }

    let batch = require_batch(db, batch_id).await?;
    if batch.status != BatchStatus::Approved {
        return Err(Error::InvalidTransition {
            from: batch.status.as_str().to_string(),
            to: BatchStatus::Paid.as_str().to_string(),
        });
    }

    let mut active: payroll_batch::ActiveModel = batch.into();
    active.status = Set(BatchStatus::Paid);
    active.paid_at = Set(Some(Utc::now()));
    active.update(db).await.map_err(Into::into)
}

/// Loads a batch by ID or fails with [`Error::BatchNotFound`].
pub async fn require_batch<C>(db: &C, batch_id: i64) -> Result<payroll_batch::Model>
where
    C: ConnectionTrait,
{
    PayrollBatch::find_by_id(batch_id)
        .one(db)
        .await?
        .ok_or(Error::BatchNotFound { id: batch_id })
}

/// Lists all batches, newest first.
pub async fn get_all_batches(db: &DatabaseConnection) -> Result<Vec<payroll_batch::Model>> {
    PayrollBatch::find()
        .order_by_desc(payroll_batch::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists the items of one batch.
pub async fn get_batch_items(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Vec<payroll_item::Model>> {
    PayrollItem::find()
        .filter(payroll_item::Column::BatchId.eq(batch_id))
        .order_by_asc(payroll_item::Column::EmployeeId)
        .all(db)
        .await
        .map_err(Into::into)
}
