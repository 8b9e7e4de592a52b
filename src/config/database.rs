//! Database configuration module.
//!
//! Handles `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions via `Schema::create_table_from_entity`,
//! so the database schema always matches the Rust struct definitions without
//! manual SQL.

use crate::entities::{Attendance, ChangeRequest, Employee, PayrollBatch, PayrollItem, Schedule};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns the default
/// local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/milldesk.sqlite".to_string())
}

/// Establishes a connection to the database given its URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Creates tables for employees, schedules, attendances, payroll batches,
/// payroll items, and change requests.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let employee_table = schema.create_table_from_entity(Employee);
    let schedule_table = schema.create_table_from_entity(Schedule);
    let attendance_table = schema.create_table_from_entity(Attendance);
    let payroll_batch_table = schema.create_table_from_entity(PayrollBatch);
    let payroll_item_table = schema.create_table_from_entity(PayrollItem);
    let change_request_table = schema.create_table_from_entity(ChangeRequest);

    db.execute(builder.build(&employee_table)).await?;
    db.execute(builder.build(&schedule_table)).await?;
    db.execute(builder.build(&attendance_table)).await?;
    db.execute(builder.build(&payroll_batch_table)).await?;
    db.execute(builder.build(&payroll_item_table)).await?;
    db.execute(builder.build(&change_request_table)).await?;

    Ok(())
}
