//! Unified error type for all milldesk operations.
//!
//! Core business-logic functions return [`Result`] with this enum so that the
//! API layer can map each failure to a stable HTTP status and message.

use chrono::NaiveDate;
use thiserror::Error;

/// All errors that milldesk operations can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Underlying SeaORM / database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (config files, network binding)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No employee with the given identifier
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id or nik that failed to resolve
        id: String,
    },

    /// No work schedule for the employee on the given date
    #[error("Schedule not found for employee {employee_id} on {date}")]
    ScheduleNotFound {
        /// Employee whose schedule was looked up
        employee_id: i64,
        /// Date the lookup covered
        date: NaiveDate,
    },

    /// The employee already checked in for this schedule
    #[error("Already checked in today ({date})")]
    AlreadyCheckedIn {
        /// Date of the existing check-in
        date: NaiveDate,
    },

    /// Check-out without a prior check-in
    #[error("No check-in recorded for today")]
    NotCheckedIn,

    /// The employee already checked out for this schedule
    #[error("Already checked out today")]
    AlreadyCheckedOut,

    /// Check-in attempted outside the allowed window around the shift
    #[error("Check-in not allowed at {at}: window is {window_start} to {window_end}")]
    OutsideCheckInWindow {
        /// The attempted check-in time (UTC)
        at: chrono::DateTime<chrono::Utc>,
        /// Earliest allowed check-in (UTC)
        window_start: chrono::DateTime<chrono::Utc>,
        /// Latest allowed check-in (UTC)
        window_end: chrono::DateTime<chrono::Utc>,
    },

    /// A monetary or hour amount failed validation (negative, NaN, infinite)
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },

    /// A status change that the lifecycle does not permit
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },

    /// The acting employee's role does not permit the operation
    #[error("Role {role} is not permitted to {action}")]
    PermissionDenied {
        /// Role of the acting employee
        role: String,
        /// The operation that was attempted
        action: String,
    },

    /// No payroll batch with the given id
    #[error("Payroll batch not found: {id}")]
    BatchNotFound {
        /// The batch id that failed to resolve
        id: i64,
    },

    /// No change request with the given id
    #[error("Change request not found: {id}")]
    RequestNotFound {
        /// The request id that failed to resolve
        id: i64,
    },

    /// A change request targeted a field that is not open to self-service edits
    #[error("Field is not editable via change request: {field}")]
    FieldNotEditable {
        /// The rejected field name
        field: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
