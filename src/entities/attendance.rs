//! Attendance entity - Records check-in/check-out against a schedule (Presensi).
//!
//! One attendance row exists per schedule once the employee checks in.
//! GPS coordinates are optional on both ends; `late_minutes` is computed at
//! check-in time against the scheduled shift start.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Attendance database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    /// Unique identifier for the attendance record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the schedule this attendance fulfils
    #[sea_orm(unique)]
    pub schedule_id: i64,
    /// ID of the employee who checked in
    pub employee_id: i64,
    /// Calendar date of the shift (UTC), denormalized from the schedule
    pub work_date: Date,
    /// Check-in timestamp (UTC)
    pub check_in: DateTimeUtc,
    /// Check-out timestamp (UTC), None while the shift is in progress
    pub check_out: Option<DateTimeUtc>,
    /// Latitude reported at check-in, if the client sent coordinates
    pub check_in_lat: Option<f64>,
    /// Longitude reported at check-in
    pub check_in_lon: Option<f64>,
    /// Latitude reported at check-out
    pub check_out_lat: Option<f64>,
    /// Longitude reported at check-out
    pub check_out_lon: Option<f64>,
    /// Minutes late relative to the scheduled shift start (0 if on time)
    pub late_minutes: i32,
}

/// Defines relationships between Attendance and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each attendance record belongs to one schedule
    #[sea_orm(
        belongs_to = "super::schedule::Entity",
        from = "Column::ScheduleId",
        to = "super::schedule::Column::Id"
    )]
    Schedule,
    /// Each attendance record belongs to one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedule.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
