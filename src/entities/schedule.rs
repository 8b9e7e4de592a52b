//! Schedule entity - Represents a planned work shift (Jadwal).
//!
//! Each schedule assigns one employee to a shift on a calendar date.
//! Attendance records must reference a schedule; check-in is only valid
//! inside a window around the scheduled shift.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Schedule database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    /// Unique identifier for the schedule
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the employee assigned to this shift
    pub employee_id: i64,
    /// Calendar date of the shift (UTC)
    pub work_date: Date,
    /// Scheduled shift start time
    pub shift_start: Time,
    /// Scheduled shift end time
    pub shift_end: Time,
    /// Work site, if assigned (e.g., `"wood_plant"`, `"steel_plant"`, `"office"`)
    pub location: Option<String>,
}

/// Defines relationships between Schedule and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each schedule belongs to one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
    /// One schedule has at most one attendance record
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendances,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
