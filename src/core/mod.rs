//! Core business logic - framework-agnostic operations over the entities.
//!
//! Every function here takes a database connection and returns structured
//! data or a typed error; the API layer only translates to and from JSON.

/// Change-request submission and HR review workflow
pub mod approval;
/// Check-in/check-out with schedule and time-window validation
pub mod attendance;
/// Employee creation, lookup, and profile-field application
pub mod employee;
/// Pay arithmetic, batch generation, and the batch status lifecycle
pub mod payroll;
/// Attendance summaries and batch report formatting
pub mod report;
/// Work schedule creation and lookups
pub mod schedule;
