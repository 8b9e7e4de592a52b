//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod attendance;
pub mod change_request;
pub mod employee;
pub mod payroll_batch;
pub mod payroll_item;
pub mod schedule;

// Re-export specific types to avoid conflicts
pub use attendance::{Column as AttendanceColumn, Entity as Attendance, Model as AttendanceModel};
pub use change_request::{
    Column as ChangeRequestColumn, Entity as ChangeRequest, Model as ChangeRequestModel,
    RequestStatus,
};
pub use employee::{
    Column as EmployeeColumn, EmployeeRole, Entity as Employee, Model as EmployeeModel,
};
pub use payroll_batch::{
    BatchStatus, Column as PayrollBatchColumn, Entity as PayrollBatch, Model as PayrollBatchModel,
};
pub use payroll_item::{
    Column as PayrollItemColumn, Entity as PayrollItem, Model as PayrollItemModel,
};
pub use schedule::{Column as ScheduleColumn, Entity as Schedule, Model as ScheduleModel};
