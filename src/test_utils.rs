//! Shared test utilities for `milldesk`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{employee, schedule},
    entities::{self, EmployeeRole},
    errors::Result,
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test employee with sensible defaults.
///
/// # Defaults
/// * `department`: `"wood_production"`
/// * `position`: `"Operator"`
/// * `role`: crew
/// * `hourly_rate`: 10.0
/// * `monthly_allowance`: 0.0
pub async fn create_test_employee(
    db: &DatabaseConnection,
    nik: &str,
    name: &str,
) -> Result<entities::employee::Model> {
    employee::create_employee(
        db,
        nik.to_string(),
        name.to_string(),
        "wood_production".to_string(),
        "Operator".to_string(),
        EmployeeRole::Crew,
        10.0,
        0.0,
    )
    .await
}

/// Creates a test employee with a specific role and pay parameters.
/// Use this for role-gated workflow tests.
pub async fn create_custom_employee(
    db: &DatabaseConnection,
    nik: &str,
    name: &str,
    role: EmployeeRole,
    hourly_rate: f64,
    monthly_allowance: f64,
) -> Result<entities::employee::Model> {
    employee::create_employee(
        db,
        nik.to_string(),
        name.to_string(),
        "general".to_string(),
        "Staff".to_string(),
        role,
        hourly_rate,
        monthly_allowance,
    )
    .await
}

/// Creates a test schedule with the default 08:00-16:00 shift.
pub async fn create_test_schedule(
    db: &DatabaseConnection,
    employee_id: i64,
    work_date: NaiveDate,
) -> Result<entities::schedule::Model> {
    schedule::create_schedule(
        db,
        employee_id,
        work_date,
        NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
        NaiveTime::from_hms_opt(16, 0, 0).unwrap_or_default(),
        None,
    )
    .await
}

/// Sets up a complete test environment with one crew employee.
/// Returns (db, employee) for common test scenarios.
pub async fn setup_with_employee() -> Result<(DatabaseConnection, entities::employee::Model)> {
    let db = setup_test_db().await?;
    let employee = create_test_employee(&db, "EMP-001", "Test Employee").await?;
    Ok((db, employee))
}
