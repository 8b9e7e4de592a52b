//! Schedule business logic - Shift planning operations.
//!
//! Schedules are the anchor for attendance: check-in requires a schedule for
//! the employee on the current date. At most one schedule exists per
//! employee per date.

use crate::{
    core::employee::require_employee,
    entities::{Schedule, schedule},
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a schedule for an employee on a date.
///
/// Fails if the employee does not exist, if the shift times are inverted,
/// or if a schedule already exists for that employee and date.
pub async fn create_schedule(
    db: &DatabaseConnection,
    employee_id: i64,
    work_date: NaiveDate,
    shift_start: NaiveTime,
    shift_end: NaiveTime,
    location: Option<String>,
) -> Result<schedule::Model> {
    require_employee(db, employee_id).await?;

    if shift_end <= shift_start {
        return Err(Error::Config {
            message: format!("Shift end {shift_end} must be after shift start {shift_start}"),
        });
    }

    let existing = get_schedule_for(db, employee_id, work_date).await?;
    if existing.is_some() {
        return Err(Error::Config {
            message: format!("Employee {employee_id} already has a schedule on {work_date}"),
        });
    }

    let model = schedule::ActiveModel {
        employee_id: Set(employee_id),
        work_date: Set(work_date),
        shift_start: Set(shift_start),
        shift_end: Set(shift_end),
        location: Set(location),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Finds the schedule for an employee on a specific date, if any.
pub async fn get_schedule_for<C>(
    db: &C,
    employee_id: i64,
    work_date: NaiveDate,
) -> Result<Option<schedule::Model>>
where
    C: ConnectionTrait,
{
    Schedule::find()
        .filter(schedule::Column::EmployeeId.eq(employee_id))
        .filter(schedule::Column::WorkDate.eq(work_date))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists all schedules on a date, ordered by shift start.
/// Used by production managers to see who is on the floor.
pub async fn get_schedules_for_date(
    db: &DatabaseConnection,
    work_date: NaiveDate,
) -> Result<Vec<schedule::Model>> {
    Schedule::find()
        .filter(schedule::Column::WorkDate.eq(work_date))
        .order_by_asc(schedule::Column::ShiftStart)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists an employee's schedules inside a date range (inclusive), ordered by date.
pub async fn get_schedules_for_period<C>(
    db: &C,
    employee_id: i64,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> Result<Vec<schedule::Model>>
where
    C: ConnectionTrait,
{
    Schedule::find()
        .filter(schedule::Column::EmployeeId.eq(employee_id))
        .filter(schedule::Column::WorkDate.gte(period_start))
        .filter(schedule::Column::WorkDate.lte(period_end))
        .order_by_asc(schedule::Column::WorkDate)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_employee, create_test_schedule, setup_with_employee};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_schedule() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;

        let schedule = create_schedule(
            &db,
            employee.id,
            date(2026, 3, 2),
            time(8, 0),
            time(16, 0),
            Some("wood_plant".to_string()),
        )
        .await?;

        assert_eq!(schedule.employee_id, employee.id);
        assert_eq!(schedule.work_date, date(2026, 3, 2));
        assert_eq!(schedule.location, Some("wood_plant".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_schedule_unknown_employee() -> Result<()> {
        let (db, _employee) = setup_with_employee().await?;

        let result = create_schedule(&db, 999, date(2026, 3, 2), time(8, 0), time(16, 0), None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::EmployeeNotFound { id: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_schedule_inverted_shift() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;

        let result = create_schedule(
            &db,
            employee.id,
            date(2026, 3, 2),
            time(16, 0),
            time(8, 0),
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_schedule_duplicate_date() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;

        create_test_schedule(&db, employee.id, date(2026, 3, 2)).await?;
        let result = create_schedule(
            &db,
            employee.id,
            date(2026, 3, 2),
            time(14, 0),
            time(22, 0),
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_schedule_for() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;

        let created = create_test_schedule(&db, employee.id, date(2026, 3, 2)).await?;

        let found = get_schedule_for(&db, employee.id, date(2026, 3, 2)).await?;
        assert_eq!(found.unwrap().id, created.id);

        let none = get_schedule_for(&db, employee.id, date(2026, 3, 3)).await?;
        assert!(none.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_schedules_for_date_ordered() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;
        let other = create_test_employee(&db, "EMP-002", "Night Shift").await?;

        create_test_schedule(&db, employee.id, date(2026, 3, 2)).await?;
        let late = create_schedule(
            &db,
            other.id,
            date(2026, 3, 2),
            time(14, 0),
            time(22, 0),
            None,
        )
        .await?;

        let schedules = get_schedules_for_date(&db, date(2026, 3, 2)).await?;
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[1], late);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_schedules_for_period() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;

        create_test_schedule(&db, employee.id, date(2026, 3, 2)).await?;
        create_test_schedule(&db, employee.id, date(2026, 3, 3)).await?;
        create_test_schedule(&db, employee.id, date(2026, 3, 10)).await?;

        let in_week = get_schedules_for_period(&db, employee.id, date(2026, 3, 2), date(2026, 3, 6))
            .await?;
        assert_eq!(in_week.len(), 2);
        assert_eq!(in_week[0].work_date, date(2026, 3, 2));
        assert_eq!(in_week[1].work_date, date(2026, 3, 3));

        Ok(())
    }
}
